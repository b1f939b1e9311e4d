/// Layout invariant validation tool
/// Checks: keyword filter → word cloud → treemap, without any rendering surface
use std::path::PathBuf;

use anyhow::Context;
use repusense_layout::config::LayoutSettings;
use repusense_layout::data::{HierarchicalItem, LayoutInput, WeightedWord};
use repusense_layout::layout::validate::{check_cloud, check_treemap, Violation};
use repusense_layout::layout::{pack_treemap, pack_words, CloudConfig};
use repusense_layout::render::EmMeasurer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("repusense_layout=info".parse()?),
        )
        .init();

    let input_path = std::env::args().nth(1).map(PathBuf::from);

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          REPUSENSE LAYOUT INVARIANT VALIDATION               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let settings = LayoutSettings::default();
    let mut failures = 0usize;

    match &input_path {
        Some(path) => {
            println!("Target: {}", path.display());
            let input = LayoutInput::from_path(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let words = settings.keywords.apply(&input.words);
            failures += run_cloud("input words", &words, &settings.cloud);
            failures += run_treemap("input categories", &input.categories, &settings);
        }
        None => {
            println!("Target: built-in scenarios");
            failures += run_cloud("three words on 800x400", &three_words(), &settings.cloud);

            let cramped = CloudConfig {
                width: 50.0,
                height: 50.0,
                ..CloudConfig::default()
            };
            failures += run_cloud("twenty words on 50x50", &twenty_words(), &cramped);
            failures += run_treemap("two categories", &two_categories(), &settings);
        }
    }

    println!();
    if failures > 0 {
        anyhow::bail!("{failures} invariant violation(s) found");
    }
    println!("All layout invariants hold.");
    Ok(())
}

fn run_cloud(label: &str, words: &[WeightedWord], config: &CloudConfig) -> usize {
    println!("┌─ WORD CLOUD: {label}");
    let layout = pack_words(words, config, EmMeasurer::default());
    println!(
        "│  {} placed, {} dropped (canvas {}x{})",
        layout.placed.len(),
        layout.dropped.len(),
        config.width,
        config.height
    );
    report(&check_cloud(&layout, config))
}

fn run_treemap(label: &str, categories: &[HierarchicalItem], settings: &LayoutSettings) -> usize {
    println!("┌─ TREEMAP: {label}");
    let boxes = pack_treemap(categories, &settings.treemap);
    let parents = boxes.iter().filter(|b| b.is_parent).count();
    println!("│  {} category boxes, {} child boxes", parents, boxes.len() - parents);
    report(&check_treemap(&boxes))
}

fn report(violations: &[Violation]) -> usize {
    if violations.is_empty() {
        println!("└─ ✓ OK");
    } else {
        for v in violations {
            println!("│  ✗ {v}");
        }
        println!("└─ {} violation(s)", violations.len());
    }
    violations.len()
}

fn three_words() -> Vec<WeightedWord> {
    vec![
        WeightedWord::new("alpha", 100.0, 0.9, 1.0),
        WeightedWord::new("beta", 50.0, 0.2, 0.8),
        WeightedWord::new("gamma", 10.0, 0.5, 0.5),
    ]
}

fn twenty_words() -> Vec<WeightedWord> {
    (0..20)
        .map(|i| WeightedWord::new(&format!("keyword{i}"), 100.0 - i as f64 * 4.0, 0.5, 1.0))
        .collect()
}

fn two_categories() -> Vec<HierarchicalItem> {
    vec![
        HierarchicalItem::category(
            "A",
            60.0,
            0.3,
            vec![
                HierarchicalItem::leaf("A1", 40.0, 0.5),
                HierarchicalItem::leaf("A2", 20.0, -0.4),
            ],
        ),
        HierarchicalItem::category("B", 40.0, -0.2, Vec::new()),
    ]
}
