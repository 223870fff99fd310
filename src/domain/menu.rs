//! The fixed restaurant menu.

use std::sync::LazyLock;

use crate::domain::entities::MenuItem;

static MENU: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    vec![
        MenuItem::new("Plain Dosa", 50, "Dosa"),
        MenuItem::new("Onion Dosa", 60, "Dosa"),
        MenuItem::new("Ghee Dosa", 60, "Dosa"),
        MenuItem::new("Masala Dosa", 70, "Dosa"),
        MenuItem::new("Karam Dosa", 60, "Dosa"),
        MenuItem::new("Ghee Karam Dosa", 70, "Dosa"),
        MenuItem::new("Onion Karam Dosa", 70, "Dosa"),
        MenuItem::new("Setl Dosa", 70, "Dosa"),
        MenuItem::new("Upma Dosa", 70, "Dosa"),
        MenuItem::new("Butter Dosa", 60, "Dosa"),
        MenuItem::new("Mysore Bonda", 50, "Combo"),
        MenuItem::new("Idli + Punugulu + Vada", 50, "Combo"),
        MenuItem::new("Idli + Punugulu + Vada + Bonda", 60, "Combo"),
    ]
});

/// Returns the menu in declaration order.
///
/// The same slice is returned on every call.
pub fn list_menu() -> &'static [MenuItem] {
    &MENU
}
