// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: file (File System)

//! Reads and writes files in a local directory.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `file` component.
///
/// Reads and writes files in a local directory.
#[derive(Debug, Clone)]
pub struct FileEndpointBuilder {
    /// Starting directory for this endpoint.
    directory_name: String,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl FileEndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(directory_name: impl Into<String>) -> Self {
        let mut builder = Self {
            directory_name: directory_name.into(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// Starting directory for this endpoint.
    #[must_use]
    pub fn directory_name(mut self, directory_name: impl Into<String>) -> Self {
        self.directory_name = directory_name.into();
        self.rebuild();
        self
    }

    /// Create the directory when it is missing.
    ///
    /// Default: `true`.
    #[must_use]
    pub fn auto_create(mut self, auto_create: bool) -> Self {
        self.params.property("autoCreate", auto_create);
        self
    }

    /// Buffer size in bytes used when copying file content.
    ///
    /// Default: `131072`.
    #[must_use]
    pub fn buffer_size(mut self, buffer_size: i64) -> Self {
        self.params.property("bufferSize", buffer_size);
        self
    }

    /// Charset used when reading and writing file content.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.params.property("charset", charset.into());
        self
    }

    /// Delete files after they have been processed.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn delete(mut self, delete: bool) -> Self {
        self.params.property("delete", delete);
        self
    }

    /// Consume or produce only this file name within the directory.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.params.property("fileName", file_name.into());
        self
    }

    /// Strip leading directories from file names when producing.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.params.property("flatten", flatten);
        self
    }

    /// Directory where files are moved after a processing failure.
    #[must_use]
    pub fn move_failed(mut self, move_failed: impl Into<String>) -> Self {
        self.params.property("moveFailed", move_failed.into());
        self
    }

    /// Leave files in place and remember them to avoid reprocessing.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn noop(mut self, noop: bool) -> Self {
        self.params.property("noop", noop);
        self
    }

    /// Strategy used to detect that a file is ready to be consumed.
    ///
    /// Accepted values: `none`, `markerFile`, `fileLock`, `rename`, `changed`, `idempotent`.
    /// Default: `none`.
    #[must_use]
    pub fn read_lock(mut self, read_lock: impl Into<String>) -> Self {
        self.params.property("readLock", read_lock.into());
        self
    }

    /// Also consume files from subdirectories.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.params.property("recursive", recursive);
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.directory_name);
        self.params.url(url);
    }
}

impl EndpointBuilder for FileEndpointBuilder {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
