use leptos::prelude::*;

/// Inline SVG icon.
///
/// Outline icons stroke with `currentColor`, so a `text-*` class on the icon
/// or any ancestor sets its colour. Brand icons keep their own fills.
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let Some(glyph) = icons::glyph(name) else {
        leptos::logging::warn!("Unknown icon: {}", name);
        return ().into_any();
    };

    let stroke = if glyph.brand { "none" } else { "currentColor" };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=glyph.body
        ></svg>
    }
    .into_any()
}

/// Icon names and their SVG bodies
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_LEFT_RIGHT: &str = "arrow-left-right";
    pub const BELL: &str = "bell";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const GOOGLE: &str = "google";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const LOG_IN: &str = "log-in";
    pub const LOG_OUT: &str = "log-out";
    pub const MAIL: &str = "mail";
    pub const SEND: &str = "send";
    pub const SETTINGS: &str = "settings";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USER: &str = "user";
    pub const USER_PLUS: &str = "user-plus";
    pub const USERS: &str = "users";
    pub const WALLET: &str = "wallet";
    pub const WAVES: &str = "waves";

    /// SVG content for one icon
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Glyph {
        pub body: &'static str,
        /// Brand marks are filled in their own colours rather than stroked
        pub brand: bool,
    }

    const GLYPHS: &[(&str, Glyph)] = &[
        (ACTIVITY, Glyph { brand: false, body: "<path d=\"M22 12h-4l-3 9L9 3l-3 9H2\"/>" }),
        (ALERT_CIRCLE, Glyph { brand: false, body: "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"M12 8v4M12 16h.01\"/>" }),
        (ARROW_LEFT, Glyph { brand: false, body: "<path d=\"M19 12H5M12 19l-7-7 7-7\"/>" }),
        (ARROW_LEFT_RIGHT, Glyph { brand: false, body: "<path d=\"M8 3 4 7l4 4M4 7h16M16 21l4-4-4-4M20 17H4\"/>" }),
        (BELL, Glyph { brand: false, body: "<path d=\"M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9M10.3 21a1.94 1.94 0 0 0 3.4 0\"/>" }),
        (CALENDAR, Glyph { brand: false, body: "<rect x=\"3\" y=\"4\" width=\"18\" height=\"18\" rx=\"2\"/><path d=\"M16 2v4M8 2v4M3 10h18\"/>" }),
        (CHECK, Glyph { brand: false, body: "<path d=\"M20 6 9 17l-5-5\"/>" }),
        (EYE, Glyph { brand: false, body: "<path d=\"M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z\"/><circle cx=\"12\" cy=\"12\" r=\"3\"/>" }),
        (EYE_CLOSED, Glyph { brand: false, body: "<path d=\"M9.88 9.88a3 3 0 1 0 4.24 4.24M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61M2 2l20 20\"/>" }),
        (GOOGLE, Glyph { brand: true, body: "<path fill=\"#4285F4\" d=\"M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z\"/><path fill=\"#34A853\" d=\"M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z\"/><path fill=\"#FBBC05\" d=\"M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z\"/><path fill=\"#EA4335\" d=\"M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z\"/>" }),
        (LOADER, Glyph { brand: false, body: "<path d=\"M21 12a9 9 0 1 1-6.22-8.56\"/>" }),
        (LOCK, Glyph { brand: false, body: "<rect x=\"3\" y=\"11\" width=\"18\" height=\"11\" rx=\"2\"/><path d=\"M7 11V7a5 5 0 0 1 10 0v4\"/>" }),
        (LOG_IN, Glyph { brand: false, body: "<path d=\"M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4M10 17l5-5-5-5M15 12H3\"/>" }),
        (LOG_OUT, Glyph { brand: false, body: "<path d=\"M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9\"/>" }),
        (MAIL, Glyph { brand: false, body: "<rect x=\"2\" y=\"4\" width=\"20\" height=\"16\" rx=\"2\"/><path d=\"m22 7-10 5L2 7\"/>" }),
        (SEND, Glyph { brand: false, body: "<path d=\"m22 2-7 20-4-9-9-4ZM22 2 11 13\"/>" }),
        (SETTINGS, Glyph { brand: false, body: "<circle cx=\"12\" cy=\"12\" r=\"3\"/><path d=\"M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.17 14H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9.92 3.17V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.83 10H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1Z\"/>" }),
        (TRENDING_UP, Glyph { brand: false, body: "<path d=\"m23 6-9.5 9.5-5-5L1 18M17 6h6v6\"/>" }),
        (TWITTER, Glyph { brand: true, body: "<path fill=\"#1d9bf0\" d=\"M24 4.557c-.883.392-1.832.656-2.828.775 1.017-.609 1.798-1.574 2.165-2.724-.951.564-2.005.974-3.127 1.195-.897-.957-2.178-1.555-3.594-1.555-3.179 0-5.515 2.966-4.797 6.045-4.091-.205-7.719-2.165-10.148-5.144-1.29 2.213-.669 5.108 1.523 6.574-.806-.026-1.566-.247-2.229-.616-.054 2.281 1.581 4.415 3.949 4.89-.693.188-1.452.232-2.224.084.626 1.956 2.444 3.379 4.6 3.419-2.07 1.623-4.678 2.348-7.29 2.04 2.179 1.397 4.768 2.212 7.548 2.212 9.142 0 14.307-7.721 13.995-14.646.962-.695 1.797-1.562 2.457-2.549z\"/>" }),
        (USER, Glyph { brand: false, body: "<path d=\"M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2\"/><circle cx=\"12\" cy=\"7\" r=\"4\"/>" }),
        (USER_PLUS, Glyph { brand: false, body: "<path d=\"M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2\"/><circle cx=\"9\" cy=\"7\" r=\"4\"/><path d=\"M19 8v6M22 11h-6\"/>" }),
        (USERS, Glyph { brand: false, body: "<path d=\"M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2\"/><circle cx=\"9\" cy=\"7\" r=\"4\"/><path d=\"M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75\"/>" }),
        (WALLET, Glyph { brand: false, body: "<path d=\"M21 12V7H5a2 2 0 0 1 0-4h14v4\"/><path d=\"M3 5v14a2 2 0 0 0 2 2h16v-5\"/><path d=\"M18 12a2 2 0 0 0 0 4h4v-4Z\"/>" }),
        (WAVES, Glyph { brand: false, body: "<path d=\"M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1\"/>" }),
    ];

    /// Look up an icon by name
    pub fn glyph(name: &str) -> Option<Glyph> {
        GLYPHS
            .iter()
            .find(|(glyph_name, _)| *glyph_name == name)
            .map(|(_, glyph)| *glyph)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::dashboard::STATS;

        #[test]
        fn test_every_stat_icon_exists() {
            for stat in STATS {
                assert!(glyph(stat.icon).is_some(), "missing icon {}", stat.icon);
            }
        }

        #[test]
        fn test_outline_icons_follow_text_colour() {
            let wallet = glyph(WALLET).unwrap();
            assert!(!wallet.brand);
            assert!(!wallet.body.contains("stroke=\"#"));

            for (_, glyph) in GLYPHS.iter().filter(|(_, g)| !g.brand) {
                assert!(!glyph.body.contains("stroke=\"#"));
                assert!(!glyph.body.contains("fill=\"#"));
            }
        }

        #[test]
        fn test_brand_icons_keep_fills() {
            assert!(glyph(GOOGLE).unwrap().brand);
            assert!(glyph(TWITTER).unwrap().body.contains("fill="));
        }

        #[test]
        fn test_unknown_icon() {
            assert!(glyph("does-not-exist").is_none());
        }
    }
}
