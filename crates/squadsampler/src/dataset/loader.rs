//! # Dataset Loader

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    dataset::SquadDataset,
    errors::{SSResult, SamplerError},
};

/// Shell-expand a path (``~``, ``$VAR``, ``${VAR}``).
pub fn expand_path<P: AsRef<Path>>(path: P) -> SSResult<PathBuf> {
    let path = path.as_ref();
    let Some(raw) = path.to_str() else {
        // Non-UTF-8 paths cannot carry shell syntax we could expand.
        return Ok(path.to_path_buf());
    };

    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|err| SamplerError::External(format!("cannot expand path '{raw}': {err}")))
}

/// Load a dataset from one JSON file.
pub fn load_dataset_path<P: AsRef<Path>>(path: P) -> SSResult<SquadDataset> {
    let path = expand_path(path)?;
    let reader = BufReader::new(File::open(&path)?);
    let dataset = SquadDataset::from_reader(reader)?;

    log::debug!(
        "loaded {}: {} articles, {} questions",
        path.display(),
        dataset.data.len(),
        dataset.num_questions()
    );
    Ok(dataset)
}

/// Load a dataset from files in a directory.
///
/// Every listed file is read; their articles are concatenated in list order.
/// Top-level fields other than ``data`` come from the first file.
///
/// ## Errors
/// [`SamplerError::NoInputFiles`] if `filenames` is empty.
pub fn load_dataset_dir<P, S>(
    dir: P,
    filenames: &[S],
) -> SSResult<SquadDataset>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let dir = expand_path(dir)?;

    let mut files = filenames.iter();
    let Some(first) = files.next() else {
        return Err(SamplerError::NoInputFiles {
            dir: dir.display().to_string(),
        });
    };

    let mut dataset = load_dataset_path(dir.join(first))?;
    for name in files {
        dataset.extend(load_dataset_path(dir.join(name))?);
    }

    log::info!(
        "loaded dataset from {}: {} files, {} articles, {} questions",
        dir.display(),
        filenames.len(),
        dataset.data.len(),
        dataset.num_questions()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    fn write_file(
        dir: &Path,
        name: &str,
        qid: &str,
    ) {
        let json = format!(
            r#"{{"data": [{{"paragraphs": [{{"context": "a b", "qas": [{{"id": "{qid}", "question": "a?"}}]}}]}}]}}"#
        );
        fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn test_load_dataset_dir() {
        let tmp = TempDir::new("squadsampler_loader").unwrap();
        write_file(tmp.path(), "a.json", "qa");
        write_file(tmp.path(), "b.json", "qb");

        let ds = load_dataset_dir(tmp.path(), &["b.json", "a.json"]).unwrap();
        assert_eq!(
            ds.questions().map(|q| q.id.as_str()).collect::<Vec<_>>(),
            vec!["qb", "qa"]
        );

        let ds = load_dataset_path(tmp.path().join("a.json")).unwrap();
        assert_eq!(ds.num_questions(), 1);
    }

    #[test]
    fn test_load_errors() {
        let tmp = TempDir::new("squadsampler_loader").unwrap();

        let empty: [&str; 0] = [];
        assert!(matches!(
            load_dataset_dir(tmp.path(), &empty),
            Err(SamplerError::NoInputFiles { .. })
        ));

        assert!(matches!(
            load_dataset_dir(tmp.path(), &["missing.json"]),
            Err(SamplerError::Io(_))
        ));

        fs::write(tmp.path().join("bad.json"), "{").unwrap();
        assert!(matches!(
            load_dataset_path(tmp.path().join("bad.json")),
            Err(SamplerError::Json(_))
        ));
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("plain/path").unwrap(), PathBuf::from("plain/path"));

        assert!(matches!(
            expand_path("$SQUADSAMPLER_SURELY_UNSET_VAR/x"),
            Err(SamplerError::External(_))
        ));
    }
}
