//! AWS console deep links.

/// Region used for console links when none is configured.
pub const DEFAULT_CONSOLE_REGION: &str = "us-east-1";

/// Keep only characters that can appear in CloudFront and region identifiers.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Console URL for the details page of one invalidation.
pub fn console_url(region: &str, distribution_id: &str, invalidation_id: &str) -> String {
    format!(
        "https://{}.console.aws.amazon.com/cloudfront/v3/home#/distributions/{}/invalidations/details/{}",
        sanitize_segment(region),
        sanitize_segment(distribution_id),
        sanitize_segment(invalidation_id),
    )
}
