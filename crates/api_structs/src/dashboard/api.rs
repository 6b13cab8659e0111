pub mod get_dashboard {
    use campus_domain::DashboardItem;

    pub type APIResponse = Vec<DashboardItem>;
}
