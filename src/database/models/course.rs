/// Validated course payload, ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
}
