use std::path::Path;

use crate::error::{C45Error, Result};
use super::sample_struct::Sample;


/// The column name used for class labels by default.
pub const DEFAULT_TARGET: &str = "class";


/// A struct that returns [`Sample`].
/// Using this struct, one can read a headed CSV file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use c45split::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    target: String,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: true,
            target: DEFAULT_TARGET.to_string(),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Attribute names come from the header,
    /// so reading fails if this is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    /// Default is `"class"`.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = column.as_ref().to_string();
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments, and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        if !self.has_header {
            let message = "attribute names require a header row".to_string();
            return Err(C45Error::Format { line: 1, message });
        }
        let file = self.file
            .ok_or_else(|| C45Error::Format {
                line: 0,
                message: "the file name is not set".to_string(),
            })?;

        Sample::from_csv(file, &self.target)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("c45split-{}-{name}.csv", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_a_csv_file() {
        let path = write_csv(
            "reads",
            "age,outlook,label\n25,sunny,No\n30,rainy,No\n35,sunny,Yes\n",
        );
        let sample = SampleReader::new()
            .file(&path)
            .has_header(true)
            .target_feature("label")
            .read();
        fs::remove_file(&path).unwrap();
        let sample = sample.unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert!(sample.attribute("age").unwrap().is_continuous());
        assert_eq!(sample[1].target_value(), "No");
        assert_eq!(sample.target_values().len(), 2);
    }

    #[test]
    fn headerless_files_are_rejected() {
        let path = write_csv("headerless", "25,No\n30,Yes\n");
        let result = SampleReader::new()
            .file(&path)
            .has_header(false)
            .read();
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, C45Error::Format { line: 1, .. }));
    }

    #[test]
    fn file_name_must_be_set() {
        let err = SampleReader::<PathBuf>::new()
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, C45Error::Format { line: 0, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir()
            .join(format!("c45split-{}-does-not-exist.csv", std::process::id()));
        let err = SampleReader::new()
            .file(&path)
            .read()
            .unwrap_err();
        assert!(matches!(err, C45Error::Io(_)));
    }
}
