use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;

use crate::error::{C45Error, Result};
use super::attribute::Attribute;
use super::instance::Instance;
use super::target_values::TargetValues;


/// Struct `Sample` holds the attributes, the labeled instances,
/// and the target-value universe of a training set.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) attributes: Vec<Attribute>,
    pub(super) instances: Vec<Instance>,
    pub(super) target_values: TargetValues,
}


impl Sample {
    /// Construct a `Sample` from its components.
    /// Fails if some instance is labeled outside `target_values`.
    pub fn new(
        attributes: Vec<Attribute>,
        instances: Vec<Instance>,
        target_values: TargetValues,
    ) -> Result<Self>
    {
        target_values.validate(&instances)?;
        Ok(Self { attributes, instances, target_values })
    }


    /// Read a CSV format file to `Sample` type.
    /// The first row must be the header.
    pub fn from_csv<P>(file: P, target: &str) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), target)
    }


    /// Read a headed CSV text from `reader`.
    /// The column named `target` holds the class labels;
    /// every other column becomes an attribute.
    /// A column is continuous if all of its cells are finite numbers.
    pub fn from_reader<R>(reader: R, target: &str) -> Result<Self>
        where R: BufRead,
    {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => {
                let message = "the header row is missing".to_string();
                return Err(C45Error::Format { line: 1, message });
            },
        };
        let names = header.split(',')
            .map(|name| name.trim().to_string())
            .collect::<Vec<_>>();

        let target_index = names.iter()
            .position(|name| name == target)
            .ok_or_else(|| C45Error::Format {
                line: 1,
                message: format!("no column named `{target}`"),
            })?;

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>();

            if cells.len() != names.len() {
                let message = format!(
                    "expected {} cells, got {}", names.len(), cells.len()
                );
                return Err(C45Error::Format { line: i + 2, message });
            }
            rows.push(cells);
        }

        let attributes = names.iter()
            .enumerate()
            .filter(|&(j, _)| j != target_index)
            .map(|(j, name)| {
                let is_continuous = !rows.is_empty()
                    && rows.iter().all(|row| {
                        row[j].parse::<f64>().is_ok_and(f64::is_finite)
                    });
                Attribute::new(name, is_continuous)
            })
            .collect::<Vec<_>>();

        let instances = rows.into_iter()
            .map(|mut row| {
                let label = row.remove(target_index);
                let values = attributes.iter()
                    .map(Attribute::name)
                    .zip(row);
                Instance::new(values, label)
            })
            .collect::<Vec<_>>();

        let target_values = TargetValues::from_instances(&instances);

        log::debug!(
            "read {} instances with {} attributes and {} target values",
            instances.len(), attributes.len(), target_values.len(),
        );

        Ok(Self { attributes, instances, target_values })
    }


    /// Returns the attributes.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }


    /// Returns the instances.
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }


    /// Returns the target-value universe.
    #[inline]
    pub fn target_values(&self) -> &TargetValues {
        &self.target_values
    }


    /// Returns the attribute named `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }


    /// Returns the pair of the number of instances and attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.attributes.len())
    }
}


impl Index<usize> for Sample {
    type Output = Instance;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.instances[idx]
    }
}
