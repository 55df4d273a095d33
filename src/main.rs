use bitmap_search::args::Args;
use bitmap_search::bitmap;
use bitmap_search::search::{SearchConfig, SearchCoordinator, Template};

fn main() {
    env_logger::init();

    let Some(args) = Args::parse() else {
        std::process::exit(2);
    };

    let reference = match bitmap::decode(&args.reference) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("❌ Failed to decode reference image {}: {e}", args.reference);
            std::process::exit(1);
        }
    };
    log::info!(
        "reference image {}: {}x{}",
        args.reference,
        reference.width(),
        reference.height()
    );

    // A template that fails to load drops out of the run; its siblings
    // still get searched.
    let mut templates = Vec::new();
    for name in &args.templates {
        match Template::load(name) {
            Ok(template) => templates.push(template),
            Err(e) => log::error!("skipping template {name}: {e}"),
        }
    }
    if templates.is_empty() {
        eprintln!("❌ No usable templates");
        std::process::exit(1);
    }

    let config = SearchConfig {
        max_scale: args.max_scale,
        worker_count: args.worker_count,
    };
    let coordinator = SearchCoordinator::new(reference, config);

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let results = match runtime.block_on(coordinator.run(templates)) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("❌ Search failed: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("results serialize to JSON")
        );
    } else {
        for result in &results {
            println!(
                "{}\t{}\t{}",
                result.template_id, result.position_x, result.position_y
            );
        }
    }
}
