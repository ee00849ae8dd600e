// encverify-cli/src/commands/hash.rs
//
// The `hash` command. Files are hashed in parallel, one rayon task per file,
// and printed in argument order in the `<digest>  <path>` layout of
// sha1sum. A file that cannot be read is reported and skipped.

use std::path::PathBuf;

use encverify_core::{ContentDigest, CoreError, CoreResult, content_digest};
use rayon::prelude::*;
use serde_json::json;

use crate::cli::HashArgs;
use crate::config::{EXIT_ERROR, EXIT_SUCCESS};
use crate::output::print_error;

/// Hashes every file, keeping input order.
pub fn hash_files(files: &[PathBuf]) -> Vec<(PathBuf, CoreResult<ContentDigest>)> {
    files
        .par_iter()
        .map(|path| (path.clone(), content_digest(path)))
        .collect()
}

/// Execute the hash command
pub fn run_hash(args: &HashArgs) -> CoreResult<i32> {
    let results = hash_files(&args.files);
    let failures = results.iter().filter(|(_, result)| result.is_err()).count();

    if args.json {
        let entries: Vec<_> = results
            .iter()
            .map(|(path, result)| match result {
                Ok(digest) => json!({ "path": path, "digest": digest }),
                Err(e) => json!({ "path": path, "error": e.to_string() }),
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| CoreError::JsonParse(format!("Failed to serialize digests: {}", e)))?;
        println!("{}", text);
    } else {
        for (path, result) in &results {
            match result {
                Ok(digest) => println!("{}  {}", digest, path.display()),
                Err(e) => print_error(e),
            }
        }
    }

    if failures > 0 {
        log::warn!("{} of {} file(s) could not be hashed", failures, results.len());
        Ok(EXIT_ERROR)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
