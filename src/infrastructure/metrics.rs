// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化指标系统
///
/// 未启用时不安装记录器，`metrics` 宏调用退化为空操作
pub fn init_metrics(settings: &MetricsSettings) -> anyhow::Result<()> {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return Ok(());
    }

    let addr: SocketAddr = settings.listen.parse()?;

    // Ignore error if the recorder is already installed (tests, restarts)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return Ok(());
    }

    describe_counter!(
        "bridge_captures_total",
        "Total number of page captures by outcome"
    );
    describe_histogram!(
        "bridge_capture_duration_seconds",
        "Duration of a full page render in seconds"
    );
    describe_counter!("bridge_cache_hits_total", "Page cache hits");
    describe_counter!("bridge_cache_misses_total", "Page cache misses");

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

/// 记录一次捕获的结果
pub fn record_capture(outcome: &'static str) {
    metrics::counter!("bridge_captures_total", "outcome" => outcome).increment(1);
}
