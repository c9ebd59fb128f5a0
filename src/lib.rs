//! Highlighting and scroll-indicator core for the SQL practice catalogue.
//!
//! The crate turns a frozen JSON catalogue of SQL problems into highlighted,
//! whitespace-exact markup and drives the zigzag scroll indicator that sits
//! beside the problem index.
//!
//! ```rust
//! use sqldaily::*;
//!
//! let sql = "SELECT id FROM users";
//! let tokens = highlight_sql(sql);
//! assert_eq!(reconstruct(sql, &tokens), sql);
//! assert!(tokens[0].is_keyword(Keyword::Select));
//! ```

reexport!(testing, test);
reexport!(token);
reexport!(sql);
reexport!(schema);
reexport!(render);
reexport!(indicator);
reexport!(cache);
reexport!(dataset);
reexport!(catalogue);
reexport!(config);
reexport!(error);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
