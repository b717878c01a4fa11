//! Feedback, input, form, structure, navigation, and layout components.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::variants::{
    class_if, merge_classes, token_enum, CompoundRule, VariantGroup, VariantSpec, VariantToken,
};
use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod feedback;
mod forms;
mod layout;
mod navigation;
mod skeleton;

pub use controls::{
    clear_visible, step_value, Button, ButtonSize, ButtonVariant, Checkbox, FileUpload,
    FileUploadSize, FileUploadVariant, Input, InputSize, InputVariant, NumberInput, PasswordInput,
    PasswordVisibility, SearchInput, StepDirection, Switch, UploadedFile,
};
pub use data_display::{
    Badge, BadgeVariant, Card, Divider, DividerLabelPosition, DividerSpacing, DividerVariant,
    Orientation,
};
pub use feedback::{
    percentage, AlertBanner, AlertIcon, AlertVariant, CircularProgress, Dismissal, InlineAlert,
    InlineAlertVariant, LabelPosition, ProgressBar, ProgressSize, ProgressVariant, RingGeometry,
};
pub use forms::{
    FormCard, FormColumns, FormDivider, FormError, FormGroup, FormHelperText, FormLabel, FormRow,
    LabelMarker,
};
pub use layout::{
    AsidePosition, AsideWidth, AuthLayout, CardGridLayout, CenteredLayout, ColumnGap,
    DashboardLayout, DashboardSidebarWidth, GridColumns, GridGap, IllustrationSide, LayoutPadding,
    MaxWidth, MobileOrder, SplitRatio, SplitScreenLayout, StatsColumns, StatsGap, StatsGridLayout,
    StatsVariant, TwoColumnLayout,
};
pub use navigation::{AppSidebar, Navbar, SidebarItem, SidebarState, SidebarVariant};
pub use skeleton::{
    LastLineWidth, Skeleton, SkeletonAvatar, SkeletonAvatarSize, SkeletonCard, SkeletonListItem,
    SkeletonTableRow, SkeletonText, SkeletonVariant,
};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_variant_tables_are_consistent() {
        let specs: [(&str, &VariantSpec); 19] = [
            ("button", &controls::BUTTON),
            ("input", &controls::INPUT),
            ("file-upload", &controls::FILE_UPLOAD),
            ("badge", &data_display::BADGE),
            ("divider", &data_display::DIVIDER),
            ("labelled-divider", &data_display::LABELLED_DIVIDER),
            ("alert", &feedback::ALERT),
            ("inline-alert", &feedback::INLINE_ALERT),
            ("progress-track", &feedback::PROGRESS_TRACK),
            ("progress-fill", &feedback::PROGRESS_FILL),
            ("form-row", &forms::FORM_ROW),
            ("centered", &layout::CENTERED),
            ("card-grid", &layout::CARD_GRID),
            ("split-screen", &layout::SPLIT_SCREEN),
            ("stats-grid", &layout::STATS_GRID),
            ("two-column", &layout::TWO_COLUMN),
            ("two-column-aside", &layout::TWO_COLUMN_ASIDE),
            ("sidebar", &navigation::SIDEBAR),
            ("skeleton", &skeleton::SKELETON),
        ];
        for (name, spec) in specs {
            assert!(spec.validate().is_ok(), "{name}: {:?}", spec.validate());
        }
    }

    #[test]
    fn bool_tokens_match_group_options() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
