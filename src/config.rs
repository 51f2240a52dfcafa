/// Reserved id of the loyalty-points payment method.
pub const DEFAULT_POINTS_METHOD_ID: &str = "PUNKTY";

/// Share of the order value points must cover for the partial-points
/// discount, which is also the rate of that discount.
pub const DEFAULT_PARTIAL_POINTS_PERCENT: i32 = 10;

/// Tunables of an allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    pub points_method_id: String,
    pub partial_points_percent: i32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            points_method_id: DEFAULT_POINTS_METHOD_ID.to_string(),
            partial_points_percent: DEFAULT_PARTIAL_POINTS_PERCENT,
        }
    }
}

impl AllocatorConfig {
    pub fn with_points_method_id(mut self, id: impl Into<String>) -> Self {
        self.points_method_id = id.into();
        self
    }
}
