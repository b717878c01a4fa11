//! Themeable Leptos component kit.
//!
//! The crate owns the feedback, input, form, navigation, and layout
//! components together with the variant resolver that turns typed variant
//! selections into class strings, the upload validation policy behind the
//! file drop zone, and the navigation item model shared by the navbar and
//! sidebar. Every component root carries a stable `data-ui-kind` attribute
//! for styling and QA hooks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod variants;

mod icon;
pub mod nav;
mod primitives;
pub mod upload;

pub use icon::{Icon, IconName, IconSize};
pub use nav::{NavItem, NavbarItem, NavbarLink};
pub use primitives::{
    clear_visible, percentage, step_value, AlertBanner, AlertIcon, AlertVariant, AppSidebar,
    AsidePosition, AsideWidth, AuthLayout, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant,
    Card, CardGridLayout, CenteredLayout, Checkbox, CircularProgress, ColumnGap, DashboardLayout,
    DashboardSidebarWidth, Dismissal, Divider, DividerLabelPosition, DividerSpacing,
    DividerVariant, FileUpload, FileUploadSize, FileUploadVariant, FormCard, FormColumns,
    FormDivider, FormError, FormGroup, FormHelperText, FormLabel, FormRow, GridColumns, GridGap,
    IllustrationSide, InlineAlert, InlineAlertVariant, Input, InputSize, InputVariant,
    LabelMarker, LabelPosition, LastLineWidth, LayoutPadding, MaxWidth, MobileOrder, Navbar,
    NumberInput, Orientation, PasswordInput, PasswordVisibility, ProgressBar, ProgressSize,
    ProgressVariant, RingGeometry, SearchInput, SidebarItem, SidebarState, SidebarVariant,
    Skeleton, SkeletonAvatar, SkeletonAvatarSize, SkeletonCard, SkeletonListItem,
    SkeletonTableRow, SkeletonText, SkeletonVariant, SplitRatio, SplitScreenLayout, StatsColumns,
    StatsGap, StatsGridLayout, StatsVariant, StepDirection, Switch, TwoColumnLayout,
    UploadedFile,
};
pub use upload::{format_file_size, RejectionReason, UploadPolicy};
pub use variants::{VariantError, VariantSpec, VariantToken};

/// Convenience imports for application crates composing the component kit.
pub mod prelude {
    pub use crate::{
        AlertBanner, AlertIcon, AlertVariant, AppSidebar, AuthLayout, Badge, BadgeVariant, Button,
        ButtonSize, ButtonVariant, Card, CardGridLayout, CenteredLayout, Checkbox,
        CircularProgress, DashboardLayout, Divider, DividerLabelPosition, DividerSpacing,
        DividerVariant, FileUpload, FileUploadSize, FileUploadVariant, FormCard, FormColumns,
        FormDivider, FormError, FormGroup, FormHelperText, FormLabel, FormRow, GridColumns, Icon,
        IconName, IconSize, InlineAlert, InlineAlertVariant, Input, InputSize, InputVariant,
        LabelMarker, LabelPosition, NavItem, Navbar, NavbarItem, NavbarLink, NumberInput,
        Orientation, PasswordInput, ProgressBar, ProgressSize, ProgressVariant, SearchInput,
        SidebarVariant, Skeleton, SkeletonAvatar, SkeletonCard, SkeletonListItem,
        SkeletonTableRow, SkeletonText, SkeletonVariant, SplitScreenLayout, StatsGridLayout,
        Switch, TwoColumnLayout, UploadPolicy, UploadedFile,
    };
}
