//! Jalview feature file generation
//!
//! Turns InterPro annotation records into a Jalview sequence features
//! file:
//!
//! 1. [`extract`] flattens one record into [`FeatureLine`]s
//! 2. [`group_records`] collects them per feature type, in first-seen order
//! 3. [`build`] binds one [`Palette`] colour per type and lays out the file
//! 4. [`FeatureFile::write_atomic`] writes it without leaving partial output
//!
//! The resulting file looks like:
//!
//! ```text
//! domain	4E7705
//! family	9D654C
//! startgroup	interpro
//! Protein kinase domain	P00533	-1	712	979	domain	4E7705
//! endgroup	interpro
//! ```

pub mod extract;
pub mod groups;
pub mod output;
pub mod palette;

pub use extract::{extract, FeatureLine, IncludeFilter, RecordFeatures};
pub use groups::{group_records, FeatureGroups};
pub use output::{build, FeatureFile, GROUP_NAME};
pub use palette::{ColourMap, Palette, MICROSHADES_CVD};
