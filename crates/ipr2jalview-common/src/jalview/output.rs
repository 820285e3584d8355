//! Jalview features file layout and writing

use std::fmt;
use std::fs::{self, Permissions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::groups::FeatureGroups;
use super::palette::{ColourMap, Palette};
use crate::error::{IprError, Result};

/// Name of the feature group wrapping every data line
pub const GROUP_NAME: &str = "interpro";

/// A fully laid out features file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFile {
    lines: Vec<String>,
    type_count: usize,
    feature_count: usize,
}

/// Assign colours and lay out the features file.
///
/// Emits one `type<TAB>colour` header per type, then the data lines
/// between `startgroup` and `endgroup` markers. Fails with
/// [`IprError::PaletteExhausted`] before producing anything when
/// `groups` has more types than `palette` has colours.
pub fn build(groups: &FeatureGroups, mut palette: Palette) -> Result<FeatureFile> {
    let colours = ColourMap::allocate(groups, &mut palette)?;

    let mut lines = Vec::with_capacity(colours.len() + groups.feature_count() + 2);
    for (type_tag, colour) in colours.iter() {
        lines.push(format!("{type_tag}\t{colour}"));
    }

    lines.push(format!("startgroup\t{GROUP_NAME}"));

    let mut feature_count = 0;
    for feature in groups.lines() {
        let colour = colours.get(&feature.type_tag).ok_or_else(|| {
            IprError::invalid_input(format!(
                "feature type '{}' has no colour assigned",
                feature.type_tag
            ))
        })?;
        lines.push(format!(
            "{}\t{}\t-1\t{}\t{}\t{}\t{}",
            feature.label, feature.protein_label, feature.start, feature.end, feature.type_tag, colour
        ));
        feature_count += 1;
    }

    lines.push(format!("endgroup\t{GROUP_NAME}"));

    debug!(
        types = colours.len(),
        features = feature_count,
        colours_left = palette.remaining(),
        "Built Jalview features file"
    );

    Ok(FeatureFile {
        lines,
        type_count: colours.len(),
        feature_count,
    })
}

impl FeatureFile {
    /// All lines in output order, without line terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of colour header lines
    pub fn type_count(&self) -> usize {
        self.type_count
    }

    /// Number of data lines
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Write the file to `path`, replacing it only once fully written.
    ///
    /// Content goes to a temporary file next to `path` which is then
    /// renamed over it, so readers never see a truncated file. An existing
    /// file keeps its permissions; a new one gets [`NEW_FILE_MODE`] on Unix.
    pub fn write_atomic(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(IprError::invalid_input(format!(
                "output path '{}' does not name a file",
                path.display()
            )));
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(".ipr2jalview-")
            .suffix(".tmp")
            .tempfile_in(&dir)?;

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            for line in &self.lines {
                writeln!(writer, "{line}")?;
            }
            writer.flush()?;
        }
        if let Some(permissions) = target_permissions(path)? {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(path).map_err(|e| e.error)?;

        info!(
            path = %path.display(),
            types = self.type_count,
            features = self.feature_count,
            "Wrote Jalview features file"
        );

        Ok(())
    }
}

/// Mode given to a newly created features file
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o644;

/// Permissions the written file should end up with
fn target_permissions(path: &Path) -> Result<Option<Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

impl fmt::Display for FeatureFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
