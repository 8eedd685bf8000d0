mod extract;
mod loader;
mod matcher;
mod report;

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use matcher::criteria::{parse_terms, MatchCriteria};
use report::Report;

#[derive(Parser)]
#[command(name = "resume_matcher", about = "JD-resume matching over a folder of PDF/DOCX resumes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match every resume in a directory against the criteria
    Run {
        /// Directory containing .pdf/.docx resumes
        dir: PathBuf,
        /// Comma-separated keywords (these drive the match percentage)
        #[arg(short, long, default_value = "")]
        keywords: String,
        /// Comma-separated domain terms
        #[arg(long, default_value = "")]
        domains: String,
        /// Comma-separated tool terms
        #[arg(long, default_value = "")]
        tools: String,
        /// Comma-separated skill terms
        #[arg(long, default_value = "")]
        skills: String,
        /// Minimum years of experience required
        #[arg(short = 'e', long)]
        min_experience: Option<f64>,
        /// Lower the experience requirement by one year (5+ becomes 4+)
        #[arg(long)]
        relax: bool,
        /// Write the report as CSV to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print only rows that satisfy the experience requirement
        #[arg(long)]
        matched_only: bool,
        /// Dump the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Extract a single resume: text preview plus inferred contacts
    Extract {
        /// Path to a .pdf or .docx file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            dir,
            keywords,
            domains,
            tools,
            skills,
            min_experience,
            relax,
            out,
            matched_only,
            json,
        } => {
            let docs = loader::load_dir(&dir)?;
            if docs.is_empty() {
                println!("No resumes found in {}. Provide .pdf/.docx files.", dir.display());
                return Ok(());
            }

            let criteria = MatchCriteria {
                keywords: parse_terms(&keywords),
                domains: parse_terms(&domains),
                tools: parse_terms(&tools),
                skills: parse_terms(&skills),
                min_experience,
                relax,
            };

            println!("Matching {} resumes...", docs.len());
            let pb = ProgressBar::new(docs.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
                    .progress_chars("=> "),
            );
            let rep = matcher::run_batch(&docs, &criteria, |done, _| pb.set_position(done as u64))?;
            pb.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&rep)?);
            } else {
                print_table(&rep, matched_only);
            }

            let summary = rep.summary();
            println!(
                "\n{} resumes | {} matched | avg match {:.2}%",
                summary.total, summary.matched, summary.avg_match_pct
            );

            if let Some(path) = out {
                rep.write_csv(File::create(&path)?)?;
                println!("Report written to {}", path.display());
            }
            Ok(())
        }
        Commands::Extract { file } => {
            let text = extract::extract_file(&file);
            if text.is_empty() {
                println!("No text extracted from {}.", file.display());
                return Ok(());
            }
            let contact = matcher::contacts::infer_contacts(&text);
            println!("{} chars extracted", text.len());
            for line in text.lines().filter(|l| !l.trim().is_empty()).take(10) {
                println!("  | {}", line.trim_end());
            }
            println!("Name:   {}", contact.name);
            println!("Emails: {}", contact.emails.join(", "));
            println!("Phones: {}", contact.phones.join(", "));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_table(rep: &Report, matched_only: bool) {
    println!(
        "{:>3} | {:<28} | {:<20} | {:>5} | {:>6} | {:<24}",
        "#", "File", "Name", "Yrs", "Pct", "Matched Keywords"
    );
    println!("{}", "-".repeat(100));

    for (i, r) in rep.records.iter().enumerate() {
        if matched_only && !r.experience_ok {
            continue;
        }
        println!(
            "{:>3} | {:<28} | {:<20} | {:>5.1} | {:>6.2} | {:<24}",
            i + 1,
            truncate(&r.filename, 28),
            truncate(&r.name, 20),
            r.experience_years,
            r.match_pct,
            truncate(&r.matched_keywords.join(";"), 24),
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
