/// Diagnostic tool to verify input → keyword filter → layout pipeline
use std::path::PathBuf;

use anyhow::Context;
use repusense_layout::config::LayoutSettings;
use repusense_layout::data::LayoutInput;
use repusense_layout::layout::{pack_treemap, pack_words};
use repusense_layout::render::{EmMeasurer, FontdueMeasurer, SentimentBand, TextMeasurer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("repusense_layout=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .map(PathBuf::from)
        .context("usage: debug-layout <input.json> [settings.toml] [font.ttf]")?;
    let settings_path = args.next().map(PathBuf::from);
    let font_path = args.next().map(PathBuf::from);

    println!("=== DIAGNOSTIC: Input → Layout Pipeline ===");
    println!("Input: {}", input_path.display());

    let input = LayoutInput::from_path(&input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;
    let settings = match &settings_path {
        Some(path) => LayoutSettings::from_path(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => LayoutSettings::default(),
    };

    println!(
        "\n[1] Loaded {} words, {} categories ({} children)",
        input.words.len(),
        input.categories.len(),
        input.categories.iter().map(|c| c.children.len()).sum::<usize>()
    );

    // Filter keywords the way the dashboard card does
    let words = settings.keywords.apply(&input.words);
    println!(
        "\n[2] Keyword filter (min_relevance={}, sort={:?}, limit={}): {} words kept",
        settings.keywords.min_relevance,
        settings.keywords.sort_by,
        settings.keywords.limit,
        words.len()
    );

    // Measure with a real font when one is available
    let mut measurer: Box<dyn TextMeasurer> = match &font_path {
        Some(path) => Box::new(
            FontdueMeasurer::from_path(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => match FontdueMeasurer::load_system() {
            Ok(m) => Box::new(m),
            Err(e) => {
                tracing::warn!("{e}; falling back to em-width estimate");
                Box::new(EmMeasurer::default())
            }
        },
    };

    let cloud = pack_words(&words, &settings.cloud, &mut *measurer);
    println!(
        "\n[3] Word cloud {}x{}: {} placed, {} dropped",
        settings.cloud.width,
        settings.cloud.height,
        cloud.placed.len(),
        cloud.dropped.len()
    );

    println!("\n[4] Top 10 placements:");
    for (i, word) in cloud.placed.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - {:.1}px at ({:.1}, {:.1}) box {:.0}x{:.0} {}",
            i, word.text, word.font_size, word.x, word.y, word.width, word.height, word.color
        );
    }
    for word in &cloud.dropped {
        println!("    dropped: '{}' (frequency {})", word.text, word.frequency);
    }

    let canvas_area = settings.cloud.width * settings.cloud.height;
    let ink_area: f32 = cloud.placed.iter().map(|w| w.width * w.height).sum();
    if canvas_area > 0.0 {
        println!("    Coverage: {:.1}%", ink_area / canvas_area * 100.0);
    }

    let boxes = pack_treemap(&input.categories, &settings.treemap);
    println!("\n[5] Treemap: {} boxes", boxes.len());
    for b in &boxes {
        let indent = if b.is_parent { "" } else { "    " };
        println!(
            "    {}'{}' x={:.2}% w={:.2}% y={:.0}px h={:.0}px size={} {} {}{}",
            indent,
            b.name,
            b.x,
            b.width,
            b.y,
            b.height,
            b.size,
            b.color.to_hex(),
            SentimentBand::from_signed(b.sentiment).label(),
            if b.show_label(&settings.treemap) { "" } else { " (no label)" }
        );
    }

    let depth = boxes
        .iter()
        .map(|b| b.y + b.height)
        .fold(0.0f32, f32::max);
    println!("    Total depth: {depth:.0}px");

    Ok(())
}
