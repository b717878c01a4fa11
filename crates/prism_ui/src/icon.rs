//! Centralized stroke icon set.

use leptos::*;

use crate::variants::{merge_classes, token_enum, VariantToken};

const CIRCLE_R10: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z";
const FILE_OUTLINE: &str = "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z";
const FILE_FOLD: &str = "M14 2v4a2 2 0 0 0 2 2h4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to components and apps.
pub enum IconName {
    /// Information circle.
    Info,
    /// Check inside a circle.
    CheckCircle,
    /// Warning triangle.
    AlertTriangle,
    /// Exclamation inside a circle.
    AlertCircle,
    /// Close cross.
    Dismiss,
    /// Open eye.
    Eye,
    /// Struck-through eye.
    EyeOff,
    /// Magnifier.
    Search,
    /// Upload tray with arrow.
    Upload,
    /// Generic document.
    File,
    /// Document with text lines.
    FileText,
    /// Picture frame.
    Image,
    /// Hamburger menu.
    Menu,
    /// Downward chevron.
    ChevronDown,
    /// Rightward chevron.
    ChevronRight,
    /// Leftward chevron.
    ChevronLeft,
    /// Notification bell.
    Bell,
    /// Single person.
    User,
    /// Two people.
    Users,
    /// House.
    Home,
    /// Gear.
    Settings,
    /// Bar chart.
    BarChart,
    /// Question mark inside a circle.
    HelpCircle,
    /// Plus sign.
    Plus,
    /// Minus sign.
    Minus,
    /// Lightning bolt.
    Zap,
}

impl IconName {
    /// SVG path data on a 24x24 stroke grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Info => &[CIRCLE_R10, "M12 16v-4", "M12 8h.01"],
            Self::CheckCircle => &[CIRCLE_R10, "m9 12 2 2 4-4"],
            Self::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::AlertCircle => &[CIRCLE_R10, "M12 8v4", "M12 16h.01"],
            Self::Dismiss => &["M18 6 6 18", "m6 6 12 12"],
            Self::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6Z",
            ],
            Self::EyeOff => &[
                "M9.88 9.88a3 3 0 1 0 4.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
                "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
                "m2 2 20 20",
            ],
            Self::Search => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16Z", "m21 21-4.3-4.3"],
            Self::Upload => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m17 8-5-5-5 5",
                "M12 3v12",
            ],
            Self::File => &[FILE_OUTLINE, FILE_FOLD],
            Self::FileText => &[FILE_OUTLINE, FILE_FOLD, "M10 9H8", "M16 13H8", "M16 17H8"],
            Self::Image => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z",
                "M9 7a2 2 0 1 0 0 4a2 2 0 1 0 0-4Z",
                "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::ChevronLeft => &["m15 18-6-6 6-6"],
            Self::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8Z",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8Z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            Self::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6Z",
            ],
            Self::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Self::HelpCircle => &[CIRCLE_R10, "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3", "M12 17h.01"],
            Self::Plus => &["M5 12h14", "M12 5v14"],
            Self::Minus => &["M5 12h14"],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

token_enum! {
    /// Rendered icon size.
    pub enum IconSize in "size" {
        /// 12px.
        Xs => "xs",
        /// 16px.
        Sm => "sm",
        /// 20px.
        Md => "md",
        /// 24px.
        Lg => "lg",
    }
    default = Md;
}

impl IconSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "h-3 w-3",
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
            Self::Lg => "h-6 w-6",
        }
    }
}

#[component]
/// Inline SVG icon. Decorative by default (`aria-hidden`).
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = merge_classes([size.classes(), "shrink-0", layout_class.unwrap_or("")]);
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        >
            {icon.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}
