//! Breadcrumb resolution.
//!
//! The resolver walks the prefix chain of the current path, asks the router
//! which route governs each prefix, derives a fallback label and lets the
//! translator have the final word. It holds no state between calls: every
//! invocation is an independent computation over its inputs.
//!
//! # Labeling rules
//!
//! For each prefix the leaf (last) matched record governs the item:
//!
//! - the translation key is `<key_prefix>.<name>.<key_suffix>`, with the
//!   route name's locale suffix stripped (an absent record gives an empty
//!   name);
//! - a non-root prefix falls back to its title-cased segment text;
//! - the root falls back to its record's `title`, or the empty string.
//!
//! Only the item for the full path is marked `current`.

use crate::breadcrumb::{title_case_segment, BreadcrumbItem};
use crate::locale::LocaleSuffix;
use crate::path::{Prefix, PrefixChain};
use crate::router::{RouteRecord, Router, Translator};
use crate::Result;

/// Default first part of the translation key.
pub const DEFAULT_KEY_PREFIX: &str = "breadcrumb.items";

/// Default last part of the translation key.
pub const DEFAULT_KEY_SUFFIX: &str = "label";

/// Tunables for [`BreadcrumbResolver`].
///
/// The default options reproduce the canonical behavior exactly.
///
/// # Examples
///
/// ```
/// use crumbtrail::ResolverOptions;
///
/// let options = ResolverOptions::default().with_root_label("Home");
/// assert_eq!(options.translation_key("about"), "breadcrumb.items.about.label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// First part of the translation key.
    pub key_prefix: String,
    /// Last part of the translation key.
    pub key_suffix: String,
    /// Root fallback used when the root matched a record without a title.
    pub root_label: Option<String>,
    /// Convention for locale suffixes on route names.
    pub locale_suffix: LocaleSuffix,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            key_suffix: DEFAULT_KEY_SUFFIX.to_string(),
            root_label: None,
            locale_suffix: LocaleSuffix::default(),
        }
    }
}

impl ResolverOptions {
    /// Set the translation key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Set the translation key suffix.
    #[must_use]
    pub fn with_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.key_suffix = suffix.into();
        self
    }

    /// Set the label used for a matched root record without a title.
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }

    /// Set the locale suffix convention.
    #[must_use]
    pub fn with_locale_suffix(mut self, convention: LocaleSuffix) -> Self {
        self.locale_suffix = convention;
        self
    }

    /// Build the translation key for an already-stripped route name.
    ///
    /// An empty name yields a key with an empty middle part
    /// (`breadcrumb.items..label`).
    #[must_use]
    pub fn translation_key(&self, name: &str) -> String {
        format!("{}.{}.{}", self.key_prefix, name, self.key_suffix)
    }
}

/// Derives breadcrumb trails from paths.
///
/// # Examples
///
/// ```
/// use crumbtrail::{BreadcrumbResolver, FnRouter, RouteRecord};
///
/// let router = FnRouter(|path: &str| -> crumbtrail::Result<_> {
///     Ok(Some(match path {
///         "/" => vec![RouteRecord::named("index", "/").with_title("Home")],
///         _ => vec![RouteRecord::named("subpath", "/subpath")],
///     }))
/// });
///
/// let trail = BreadcrumbResolver::new().resolve("/subpath", &router, None).unwrap();
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail[0].label, "Home");
/// assert_eq!(trail[1].label, "Subpath");
/// assert!(trail[1].current);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbResolver {
    options: ResolverOptions,
}

impl BreadcrumbResolver {
    /// Create a resolver with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom options.
    #[must_use]
    pub fn with_options(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// The options this resolver applies.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve the breadcrumb trail for `current_path`.
    ///
    /// The path is normalized first (empty input is the root, repeated
    /// separators collapse). Without a translator every label is its
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns whatever error the router or translator returns, unchanged.
    /// Unmatched prefixes and missing translations are not errors.
    pub fn resolve<R>(
        &self,
        current_path: &str,
        router: &R,
        translator: Option<&dyn Translator>,
    ) -> Result<Vec<BreadcrumbItem>>
    where
        R: Router + ?Sized,
    {
        let chain = PrefixChain::new(current_path);
        log::debug!("resolving breadcrumbs for {chain} ({} prefixes)", chain.len());

        let mut items = Vec::with_capacity(chain.len());
        for prefix in chain.prefixes() {
            items.push(self.resolve_prefix(prefix, router, translator)?);
        }
        Ok(items)
    }

    fn resolve_prefix<R>(
        &self,
        prefix: Prefix<'_>,
        router: &R,
        translator: Option<&dyn Translator>,
    ) -> Result<BreadcrumbItem>
    where
        R: Router + ?Sized,
    {
        let record = leaf_record(router.resolve(prefix.path)?);
        let name = record
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or_default();
        let name = self.options.locale_suffix.strip(name);

        let fallback = self.fallback_label(prefix, record.as_ref());
        let key = self.options.translation_key(name);

        let label = match translator {
            Some(translator) => translator.translate(&key, &fallback)?,
            None => fallback,
        };

        log::trace!(
            "prefix {} -> record {:?}, key {key}, label {label:?}",
            prefix.path,
            record.as_ref().and_then(|r| r.name.as_deref()),
        );

        Ok(BreadcrumbItem::new(prefix.path, label, prefix.is_last))
    }

    fn fallback_label(&self, prefix: Prefix<'_>, record: Option<&RouteRecord>) -> String {
        if !prefix.is_root() {
            return title_case_segment(prefix.segment);
        }
        match record {
            Some(RouteRecord {
                title: Some(title), ..
            }) => title.clone(),
            Some(_) => self.options.root_label.clone().unwrap_or_default(),
            None => String::new(),
        }
    }
}

/// The deepest record of a match, if there was one.
fn leaf_record(matched: Option<Vec<RouteRecord>>) -> Option<RouteRecord> {
    matched.and_then(|mut records| records.pop())
}

/// Resolve a breadcrumb trail with default options.
///
/// # Errors
///
/// Returns whatever error the router or translator returns, unchanged.
///
/// # Examples
///
/// ```
/// use crumbtrail::{resolve_breadcrumbs, FnRouter};
///
/// let nothing = FnRouter(|_: &str| -> crumbtrail::Result<_> { Ok(None) });
/// let trail = resolve_breadcrumbs("/docs", &nothing, None).unwrap();
/// assert_eq!(trail[0].label, "");
/// assert_eq!(trail[1].label, "Docs");
/// ```
pub fn resolve_breadcrumbs<R>(
    current_path: &str,
    router: &R,
    translator: Option<&dyn Translator>,
) -> Result<Vec<BreadcrumbItem>>
where
    R: Router + ?Sized,
{
    BreadcrumbResolver::new().resolve(current_path, router, translator)
}
