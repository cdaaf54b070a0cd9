use crate::config::settings::StorageDefaults;
use std::fmt;

/// An object location in S3, rendered as `s3://bucket/root/path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation<'a> {
    pub bucket: &'a str,
    pub root: &'a str,
    pub path: &'a str,
}

impl<'a> StorageLocation<'a> {
    /// The root prefix always comes from `defaults`; only the bucket can be overridden.
    pub fn resolve(defaults: &'a StorageDefaults, path: &'a str, bucket: Option<&'a str>) -> Self {
        Self {
            bucket: bucket.unwrap_or(defaults.bucket.as_str()),
            root: defaults.root.as_str(),
            path,
        }
    }
}

impl fmt::Display for StorageLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root.trim_matches('/');
        let path = self.path.trim_start_matches('/');

        if root.is_empty() {
            write!(f, "s3://{}/{}", self.bucket, path)
        } else {
            write!(f, "s3://{}/{}/{}", self.bucket, root, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(bucket: &str, root: &str) -> StorageDefaults {
        StorageDefaults {
            bucket: bucket.to_string(),
            root: root.to_string(),
        }
    }

    #[test]
    fn trims_root_separators_before_joining() {
        let defaults = defaults("b", "/r/");

        let location = StorageLocation::resolve(&defaults, "x/y.mp4", None);

        assert_eq!(location.to_string(), "s3://b/r/x/y.mp4");
    }

    #[test]
    fn explicit_bucket_overrides_default_but_keeps_root() {
        let defaults = defaults("media", "uploads/");

        let location = StorageLocation::resolve(&defaults, "clip.mov", Some("archive"));

        assert_eq!(location.to_string(), "s3://archive/uploads/clip.mov");
    }

    #[test]
    fn empty_root_is_omitted() {
        let defaults = defaults("media", "/");

        let location = StorageLocation::resolve(&defaults, "/clip.mov", None);

        assert_eq!(location.to_string(), "s3://media/clip.mov");
    }

    #[test]
    fn nested_root_keeps_inner_separators() {
        let defaults = defaults("media", "//tenants/acme//");

        let location = StorageLocation::resolve(&defaults, "out/", None);

        assert_eq!(location.to_string(), "s3://media/tenants/acme/out/");
    }
}
