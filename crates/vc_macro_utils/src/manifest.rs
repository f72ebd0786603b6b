use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::{Ident, PathSegment, Token};
use toml_edit::{Document, Item, Table};

/// Crates re-exporting every `vc_*` crate under its short name, in lookup
/// order. `vc` is the usual rename of `vc_meta`.
const FACADES: [&str; 2] = ["vc_meta", "vc"];

const CRATE_PREFIX: &str = "vc_";

const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The caller's `Cargo.toml`, as seen by a proc-macro.
///
/// Generated code has to name `vc_introspect` the way the invoking crate
/// depends on it: directly, or through the `vc_meta` facade.
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_introspect"));
/// ```
///
/// | dependency                        | path                     |
/// |-----------------------------------|--------------------------|
/// | `vc_introspect`                   | `::vc_introspect`        |
/// | `vc_meta`                         | `::vc_meta::introspect`  |
/// | `vc = { package = "vc_meta" }`    | `::vc::introspect`       |
/// | none, or no readable manifest     | `::vc_introspect`        |
///
/// `[dependencies]` is searched before `[dev-dependencies]`. The last row is
/// what `vc_introspect` sees for itself; its `extern crate self as
/// vc_introspect;` keeps that path valid inside the crate.
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

impl Manifest {
    fn load(path: &Path, modified_time: Option<SystemTime>) -> Self {
        let document = fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());

        Self {
            document,
            modified_time,
        }
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(absolute_path(&[name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        FACADES
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| absolute_path(&[facade, module]))
    }

    /// Returns the path generated code should use for the crate `name`.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        self.document
            .as_ref()
            .and_then(|document| {
                DEPENDENCY_SECTIONS
                    .into_iter()
                    .find_map(|section| match document.get(section) {
                        Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                        _ => None,
                    })
            })
            .unwrap_or_else(|| absolute_path(&[name]))
    }

    /// Runs `func` with the manifest of the crate being compiled.
    ///
    /// Parsed manifests are cached per path until the file changes. Call this
    /// once per macro invocation and keep the returned paths.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = env::var_os("CARGO_MANIFEST_DIR")
            .map(|dir| PathBuf::from(dir).join("Cargo.toml"))
        else {
            return func(&Self {
                document: None,
                modified_time: None,
            });
        };

        let modified_time = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .ok();

        if modified_time.is_some() {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified_time);
        let result = func(&manifest);

        // Without a timestamp there is no way to tell when to reload.
        if modified_time.is_some() {
            MANIFESTS
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(path, manifest);
        }

        result
    }
}

/// `::a::b::...`
fn absolute_path(segments: &[&str]) -> syn::Path {
    let segments: Punctuated<PathSegment, Token![::]> = segments
        .iter()
        .map(|segment| PathSegment::from(Ident::new(segment, Span::call_site())))
        .collect();

    syn::Path {
        leading_colon: Some(<Token![::]>::default()),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use toml_edit::Document;

    use super::Manifest;

    fn resolve(manifest: &str, name: &str) -> String {
        let manifest = Manifest {
            document: Some(Document::parse(Box::from(manifest)).unwrap()),
            modified_time: None,
        };
        manifest.get_crate_path(name).to_token_stream().to_string()
    }

    #[test]
    fn direct_dependency() {
        let manifest = "[dependencies]\nvc_introspect = \"0.0.1\"\n";
        assert_eq!(resolve(manifest, "vc_introspect"), ":: vc_introspect");
    }

    #[test]
    fn through_facade() {
        let manifest = "[dependencies]\nvc_meta = \"0.0.1\"\n";
        assert_eq!(resolve(manifest, "vc_introspect"), ":: vc_meta :: introspect");

        let manifest = "[dev-dependencies]\nvc = { package = \"vc_meta\", version = \"0.0.1\" }\n";
        assert_eq!(resolve(manifest, "vc_introspect"), ":: vc :: introspect");
    }

    #[test]
    fn dependencies_before_dev_dependencies() {
        let manifest = "[dependencies]\nvc_meta = \"0.0.1\"\n\n\
            [dev-dependencies]\nvc_introspect = \"0.0.1\"\n";
        assert_eq!(resolve(manifest, "vc_introspect"), ":: vc_meta :: introspect");
    }

    #[test]
    fn fallback_to_absolute_name() {
        let manifest = "[dependencies]\nserde = \"1\"\n";
        assert_eq!(resolve(manifest, "vc_introspect"), ":: vc_introspect");
        assert_eq!(resolve(manifest, "log"), ":: log");

        let missing = Manifest {
            document: None,
            modified_time: None,
        };
        assert_eq!(
            missing.get_crate_path("vc_introspect").to_token_stream().to_string(),
            ":: vc_introspect"
        );
    }
}
