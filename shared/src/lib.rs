//! ==============================================================================
//! lib.rs - shared branding constants for the vault header
//! ==============================================================================
//!
//! purpose:
//!     static configuration consumed by the dashboard header: the logo and
//!     title lockup, the inline menu icon, and the scoped css class names.
//!     kept free of any ui dependency so it can be tested natively.
//!
//! relationships:
//!     - used by: dashboard (Header component, App)
//!     - class names must match: dashboard/style/header.css
//!     - logo path must match: dashboard/assets/logo_v1.png
//!
//! ==============================================================================

// ==============================================================================
// branding lockup
// ==============================================================================

/// logo image plus text label shown on the right of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branding {
    /// text label next to the logo
    pub title: &'static str,
    /// path the logo image is served from
    pub logo_src: &'static str,
    /// rendered logo width, height follows the aspect ratio
    pub logo_width: u32,
}

pub const VAULT_BRANDING: Branding = Branding {
    title: "Vault",
    logo_src: "/assets/logo_v1.png",
    logo_width: 40,
};

// ==============================================================================
// menu icon
// ==============================================================================

/// single-path svg drawn inside the sidebar toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuIcon {
    pub xmlns: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub view_box: &'static str,
    pub fill: &'static str,
    /// path data, three horizontal bars
    pub path: &'static str,
}

pub const MENU_ICON: MenuIcon = MenuIcon {
    xmlns: "http://www.w3.org/2000/svg",
    width: "44px",
    height: "44px",
    view_box: "0 0 24 24",
    fill: "#3155DC",
    path: "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
};

/// accessible name of the toggle button
pub const TOGGLE_LABEL: &str = "Toggle sidebar";

// ==============================================================================
// scoped css classes
// ==============================================================================

pub mod classes {
    pub const HEADER: &str = "header";
    pub const HEADER_CORNER: &str = "headerCorner";
    pub const HEADER_LOCKUP: &str = "headerLockup";
    pub const TITLE: &str = "title";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_branding_matches_logo_asset() {
        assert_eq!(VAULT_BRANDING.title, "Vault");
        assert_eq!(VAULT_BRANDING.logo_src, "/assets/logo_v1.png");
        assert_eq!(VAULT_BRANDING.logo_width, 40);
    }

    #[test]
    fn menu_icon_is_square_on_24_unit_grid() {
        assert_eq!(MENU_ICON.width, MENU_ICON.height);
        assert_eq!(MENU_ICON.view_box, "0 0 24 24");
        assert_eq!(MENU_ICON.fill, "#3155DC");
    }

    #[test]
    fn menu_icon_path_draws_three_bars() {
        // one closed subpath per bar
        let bars = MENU_ICON.path.split('z').filter(|s| !s.is_empty()).count();
        assert_eq!(bars, 3);
        assert!(MENU_ICON.path.starts_with('M'));
    }

    #[test]
    fn class_names_are_distinct() {
        let names = [
            classes::HEADER,
            classes::HEADER_CORNER,
            classes::HEADER_LOCKUP,
            classes::TITLE,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
