// web_app/nav.rs - Routes and active-link highlighting

pub const HOME_PATH: &str = "/";
pub const PRODUCTS_PATH: &str = "/products";
pub const VENDORS_PATH: &str = "/vendors";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { path: HOME_PATH, label: "Home" },
    NavItem { path: PRODUCTS_PATH, label: "Products" },
    NavItem { path: VENDORS_PATH, label: "Vendors" },
];

macro_rules! link_base {
    () => {
        "px-3 py-2 rounded-md text-sm font-medium transition-colors"
    };
}

const LINK_ACTIVE: &str = concat!(link_base!(), " text-white bg-blue-600");
const LINK_IDLE: &str = concat!(
    link_base!(),
    " text-slate-600 hover:text-slate-900 hover:bg-slate-200/60"
);

/// Exact path match; `/products/123` does not light up `/products`.
pub fn is_active(current_path: &str, target: &str) -> bool {
    current_path == target
}

pub fn nav_link_class(current_path: &str, target: &str) -> &'static str {
    if is_active(current_path, target) {
        LINK_ACTIVE
    } else {
        LINK_IDLE
    }
}
