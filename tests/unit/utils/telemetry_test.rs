// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use elementor_bridge::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        telemetry::init_telemetry();

        tracing::debug!("debug message");
        tracing::info!(post_id = 42, slug = "about", "Structured capture log");
        tracing::warn!("warning message");
    }
}
