// src/clock/metrics.rs
//! Best-effort CPU and RAM usage readout

use sysinfo::System;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SystemMetrics {
    pub cpu_percent: f32,
    pub ram_percent: f32,
}

impl SystemMetrics {
    pub fn new(cpu_percent: f32, ram_percent: f32) -> Self {
        Self {
            cpu_percent: clamp_percent(cpu_percent),
            ram_percent: clamp_percent(ram_percent),
        }
    }

    pub fn summary(&self) -> String {
        format!("CPU: {:.0}%  RAM: {:.0}%", self.cpu_percent, self.ram_percent)
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Holds the `sysinfo` handle between samples; CPU usage is computed from the
/// difference between two refreshes, so the first sample may read 0.
pub struct MetricsSampler {
    system: System,
}

impl MetricsSampler {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    pub fn sample(&mut self) -> SystemMetrics {
        self.system.refresh_cpu();
        self.system.refresh_memory();

        let cpu = self.system.global_cpu_info().cpu_usage();
        let total = self.system.total_memory();
        let ram = if total == 0 {
            0.0
        } else {
            (self.system.used_memory() as f64 / total as f64 * 100.0) as f32
        };

        SystemMetrics::new(cpu, ram)
    }
}

impl Default for MetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        let m = SystemMetrics::new(130.0, -2.0);
        assert_eq!(m.cpu_percent, 100.0);
        assert_eq!(m.ram_percent, 0.0);
        assert_eq!(SystemMetrics::new(f32::NAN, 50.0).cpu_percent, 0.0);
    }

    #[test]
    fn test_summary() {
        assert_eq!(SystemMetrics::new(12.4, 56.6).summary(), "CPU: 12%  RAM: 57%");
    }

    #[test]
    fn test_sample_in_range() {
        let mut sampler = MetricsSampler::new();
        for _ in 0..2 {
            let m = sampler.sample();
            assert!((0.0..=100.0).contains(&m.cpu_percent));
            assert!((0.0..=100.0).contains(&m.ram_percent));
        }
    }
}
