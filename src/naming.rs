//! Output paths for batch runs.
//!
//! A batch writes every input into one directory under its own file name:
//! `photos/a.jpg` → `out/a.jpg`. Two inputs that share a file name
//! (`2023/a.jpg`, `2024/a.jpg`) would land on the same path. The first one
//! keeps it; every later one is reported as a collision instead of silently
//! overwriting.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Used when an input path has no file name component (e.g. `..`).
const FALLBACK_NAME: &str = "image.png";

/// An input whose output path is already taken by an earlier input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("output {} already used by {}", path.display(), first.display())]
pub struct OutputCollision {
    pub path: PathBuf,
    pub first: PathBuf,
}

/// `<output_dir>/<input file name>`.
pub fn batch_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(FALLBACK_NAME),
    }
}

/// Output path for each input, in input order.
pub fn batch_output_paths(
    inputs: &[PathBuf],
    output_dir: &Path,
) -> Vec<Result<PathBuf, OutputCollision>> {
    let mut taken: HashMap<PathBuf, &Path> = HashMap::new();
    inputs
        .iter()
        .map(|input| {
            let path = batch_output_path(input, output_dir);
            match taken.get(&path) {
                Some(first) => Err(OutputCollision {
                    path,
                    first: first.to_path_buf(),
                }),
                None => {
                    taken.insert(path.clone(), input);
                    Ok(path)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn output_keeps_file_name() {
        assert_eq!(
            batch_output_path(Path::new("photos/a.jpg"), Path::new("out")),
            PathBuf::from("out/a.jpg")
        );
    }

    #[test]
    fn nameless_input_gets_fallback() {
        assert_eq!(
            batch_output_path(Path::new(".."), Path::new("out")),
            PathBuf::from("out/image.png")
        );
    }

    #[test]
    fn distinct_names_all_assigned() {
        let outputs = batch_output_paths(&paths(&["a.jpg", "sub/b.jpg"]), Path::new("out"));
        assert_eq!(
            outputs,
            vec![Ok(PathBuf::from("out/a.jpg")), Ok(PathBuf::from("out/b.jpg"))]
        );
    }

    #[test]
    fn same_file_name_from_two_dirs_collides() {
        let inputs = paths(&["2023/a.jpg", "2024/a.jpg", "b.jpg"]);
        let outputs = batch_output_paths(&inputs, Path::new("out"));

        assert_eq!(outputs[0], Ok(PathBuf::from("out/a.jpg")));
        assert_eq!(
            outputs[1],
            Err(OutputCollision {
                path: PathBuf::from("out/a.jpg"),
                first: PathBuf::from("2023/a.jpg"),
            })
        );
        assert_eq!(outputs[2], Ok(PathBuf::from("out/b.jpg")));
    }

    #[test]
    fn collision_message_names_both_inputs() {
        let outputs = batch_output_paths(&paths(&["x/a.png", "y/a.png"]), Path::new("out"));
        let err = outputs[1].clone().unwrap_err();
        assert_eq!(err.to_string(), "output out/a.png already used by x/a.png");
    }
}
