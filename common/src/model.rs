//! Class names of the subjects handed to matchers.
//!
//! Subjects expose their class name explicitly through [`ModelName`] rather
//! than through runtime type introspection, so namespaced names such as
//! `Admin::AuditLog` survive unchanged into catalog keys.

use std::borrow::Cow;

use crate::inflection::underscore;

/// A subject with a class name that can be mapped to catalog keys.
pub trait ModelName {
    /// The class name, using `::` between namespaces.
    fn model_name(&self) -> Cow<'_, str>;

    /// The class name in its canonical catalog form, e.g. `admin/audit_log`.
    fn canonical_name(&self) -> String {
        underscore(&self.model_name())
    }
}

impl ModelName for str {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ModelName for String {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: ModelName + ?Sized> ModelName for &T {
    fn model_name(&self) -> Cow<'_, str> {
        (**self).model_name()
    }
}

/// Implement [`ModelName`] for a type.
///
/// With a single argument the type's identifier is used as the class name;
/// pass a string literal to supply a namespaced name.
///
/// ```
/// use common::impl_model_name;
/// use common::model::ModelName;
///
/// struct Invoice;
/// struct AuditLog;
///
/// impl_model_name!(Invoice);
/// impl_model_name!(AuditLog, "Admin::AuditLog");
///
/// assert_eq!(Invoice.canonical_name(), "invoice");
/// assert_eq!(AuditLog.canonical_name(), "admin/audit_log");
/// ```
#[macro_export]
macro_rules! impl_model_name {
    ($model:ty) => {
        $crate::impl_model_name!($model, stringify!($model));
    };
    ($model:ty, $name:expr) => {
        impl $crate::model::ModelName for $model {
            fn model_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($name)
            }
        }
    };
}
