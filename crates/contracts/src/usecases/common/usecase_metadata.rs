/// Use case identity, used for log prefixes and page ids
pub trait UseCaseMetadata {
    /// Index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "select_pdf"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u101_select_pdf"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
