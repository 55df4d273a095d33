use std::env;

/// Parsed command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub worker_count: usize,
    pub max_scale: u32,
    pub reference: String,
    pub templates: Vec<String>,
    pub json: bool,
}

impl Args {
    /// Parse the process arguments. Returns `None` after printing help or
    /// version output, or on invalid usage.
    pub fn parse() -> Option<Self> {
        Self::parse_from(env::args().skip(1).collect())
    }

    pub fn parse_from(args: Vec<String>) -> Option<Self> {
        let mut json = false;
        let mut positional: Vec<String> = Vec::new();

        for arg in &args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!("Bitmap Search v{}", env!("APP_VERSION_DISPLAY"));
                return None;
            } else if arg == "--json" {
                json = true;
            } else if arg.starts_with("--") {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            } else {
                positional.push(arg.clone());
            }
        }

        if positional.len() < 4 {
            eprintln!("❌ Wrong number of parameters or invalid parameters...");
            print_help();
            return None;
        }

        let worker_count = match positional[0].parse::<usize>() {
            Ok(count) if count >= 1 => count,
            _ => {
                eprintln!("❌ Invalid worker count: {}", positional[0]);
                return None;
            }
        };

        let max_scale = match positional[1].parse::<u32>() {
            Ok(scale) if scale >= 1 => scale,
            _ => {
                eprintln!("❌ Invalid max scale: {}", positional[1]);
                return None;
            }
        };

        Some(Args {
            worker_count,
            max_scale,
            reference: positional[2].clone(),
            templates: positional[3..].to_vec(),
            json,
        })
    }
}

fn print_help() {
    println!("🔍 Bitmap Template Search");
    println!();
    println!("USAGE:");
    println!("    bitmap-search [FLAGS] <workers> <max_scale> <reference.bmp> <template.bmp>...");
    println!();
    println!("ARGS:");
    println!("    workers             Number of parallel search workers");
    println!("    max_scale           Largest integer scale applied to each template");
    println!("    reference.bmp       The image to search in (24-bit uncompressed BMP)");
    println!("    template.bmp...     Template images; file names start with a numeric id");
    println!();
    println!("FLAGS:");
    println!("    --json              Print results as JSON instead of tab-separated lines");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    bitmap-search 4 3 scene.bmp 001_coin.bmp 002_door.bmp");
    println!("    bitmap-search --json 2 2 scene.bmp 017_key.bmp");
}
