// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::ItemSummary;
use crate::geometry::BoundingBox;
use colored::*;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print one line per scene item
    pub fn report_scene(file: &Path, summaries: &[ItemSummary]) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Scene:".bold(), file.display().to_string().cyan());
        println!("{}", "━".repeat(80).bright_black());

        for (index, summary) in summaries.iter().enumerate() {
            match summary {
                ItemSummary::Shape {
                    kind,
                    transforms,
                    vertices,
                    faces,
                    bounds,
                } => {
                    println!(
                        "  {} {:<10} {} {:>6} {} {:>6} {} {:>2}",
                        format!("[{}]", index).bright_black(),
                        kind.cyan(),
                        "vertices:".bright_black(),
                        vertices,
                        "faces:".bright_black(),
                        faces,
                        "transforms:".bright_black(),
                        transforms
                    );
                    println!("      {} {}", "bbox:".bright_black(), Self::format_bounds(bounds));
                    println!("      {} {}", "size:".bright_black(), Self::format_size(bounds));
                }
                ItemSummary::Composite {
                    operation,
                    operands,
                } => {
                    println!(
                        "  {} {:<10} {} {} {}",
                        format!("[{}]", index).bright_black(),
                        operation.to_string().yellow(),
                        "operands:".bright_black(),
                        operands,
                        "(not tessellable)".bright_black()
                    );
                }
            }
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a finished export
    pub fn report_export(output: &Path, meshes: usize, format: &str, duration: Duration) {
        println!(
            "{} {} {} {} {}",
            "✅".green(),
            format!("Exported {} mesh(es) as {}", meshes, format.to_uppercase()).green(),
            "->".bright_black(),
            output.display().to_string().cyan(),
            format!("({})", Self::format_duration(duration)).bright_black()
        );
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    fn format_bounds(bounds: &BoundingBox) -> String {
        if bounds.is_empty() {
            return "empty".to_string();
        }
        format!(
            "[{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        )
    }

    fn format_size(bounds: &BoundingBox) -> String {
        if bounds.is_empty() {
            return "-".to_string();
        }
        let size = bounds.size();
        format!("{:.3} x {:.3} x {:.3}", size.x, size.y, size.z)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
