use crate::DEFAULT_BUNDLE_DIR;
use chrono::Local;

/// Builder object for specifying the name of the bundle archive.
///
/// The filename is built from several partially optional components,
/// using this pattern:
///
/// ```<basename>[_<discriminant>][_<date>_<time>].<suffix>```
///
/// The default is the plain, fixed name `outputs.tar`, which successive
/// collection runs overwrite in the destination directory.
///
/// With [`BundleSpec::use_timestamp`] every collection run produces a
/// separately named archive that can easily be associated with a concrete
/// collection, e.g. `outputs_2026-08-06_10-44-11.tar`, and a discriminant
/// keeps the bundles of several simulation sites apart:
///
/// ```rust
/// use run_keeper::BundleSpec;
///
/// let spec = BundleSpec::default()
///     .discriminant("Sierra_Nevada")
///     .use_timestamp(true);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BundleSpec {
    basename: String,
    o_discriminant: Option<String>,
    use_timestamp: bool,
    suffix: String,
}
impl Default for BundleSpec {
    /// Describes the fixed archive name `outputs.tar`.
    #[must_use]
    fn default() -> Self {
        BundleSpec {
            basename: String::from(DEFAULT_BUNDLE_DIR),
            o_discriminant: None,
            use_timestamp: false,
            suffix: String::from("tar"),
        }
    }
}
impl BundleSpec {
    /// The specified String is used as the first component of the archive
    /// name, instead of the bundle directory name.
    #[must_use]
    pub fn basename<S: Into<String>>(mut self, basename: S) -> Self {
        self.basename = basename.into();
        self
    }

    /// The specified String is added to the archive name, e.g. a site name.
    #[must_use]
    pub fn discriminant<S: Into<String>>(self, discriminant: S) -> Self {
        self.o_discriminant(Some(discriminant))
    }

    /// The specified String is added to the archive name, if given.
    #[must_use]
    pub fn o_discriminant<S: Into<String>>(mut self, o_discriminant: Option<S>) -> Self {
        self.o_discriminant = o_discriminant.map(Into::into);
        self
    }

    /// Defines if the timestamp of the collection run is included into the
    /// archive name.
    ///
    /// By default it is not; re-collecting then overwrites the previous
    /// bundle archive.
    #[must_use]
    pub fn use_timestamp(mut self, use_timestamp: bool) -> Self {
        self.use_timestamp = use_timestamp;
        self
    }

    /// Specifies the suffix of the archive name. The default is "tar".
    #[must_use]
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    // Derives the archive filename from the spec.
    pub(crate) fn filename(&self) -> String {
        let mut filename = self.basename.clone();
        filename.reserve(50);

        if let Some(discriminant) = &self.o_discriminant {
            BundleSpec::separate_with_underscore(&mut filename);
            filename.push_str(discriminant);
        }
        if self.use_timestamp {
            BundleSpec::separate_with_underscore(&mut filename);
            filename.push_str(
                &Local::now()
                    .format(TS_USCORE_DASHES_USCORE_DASHES)
                    .to_string(),
            );
        }
        filename.push('.');
        filename.push_str(&self.suffix);
        filename
    }

    fn separate_with_underscore(filename: &mut String) {
        if !filename.is_empty() {
            filename.push('_');
        }
    }
}

const TS_USCORE_DASHES_USCORE_DASHES: &str = "%Y-%m-%d_%H-%M-%S";
