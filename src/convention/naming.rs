//! Class-name transformations: type-token extraction and lookup-name
//! composition.

use super::CONTAINERS_DIR;

/// Extracts the type token of a PascalCase class name: the segment starting
/// at the last upper-case letter.
///
/// `SwitchTemplateAction` splits into `Switch`, `Template`, `Action`; the
/// type token is `Action`. A name with no upper-case letter is its own type
/// token.
pub fn class_type(class_name: &str) -> &str {
    match class_name.rfind(|c: char| c.is_ascii_uppercase()) {
        Some(idx) => &class_name[idx..],
        None => class_name,
    }
}

/// Composes the fully-qualified lookup name for a class.
///
/// The type-token folder is the pluralized type token: `SwitchTemplateAction`
/// lives under `Actions`, `CheckoutTask` under `Tasks`.
pub fn build_class_full_name(
    namespace_root: &str,
    container_name: &str,
    class_name: &str,
) -> String {
    format!(
        "{}/{}/{}/{}s/{}",
        namespace_root,
        CONTAINERS_DIR,
        container_name,
        class_type(class_name),
        class_name
    )
}
