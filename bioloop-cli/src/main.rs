//! # Bioloop CLI - Command-Line Sequence Analysis
//!
//! A command-line front end for the bioloop analysis engine. It reads input
//! files, checks parameter bounds, runs one analysis and writes the report.
//!
//! ## Usage
//!
//! ```bash
//! # Random 1 kb sequence, reproducible
//! bioloop generate -l 1000 --seed 42
//!
//! # GC content of a pasted sequence or a FASTA file
//! bioloop gc -s ATGCGC
//! bioloop gc -i genome.fasta
//!
//! # Wildcard motif search
//! bioloop dna-motif -m AXG -i genome.fasta
//! bioloop protein-motif -m MKXW -i proteins.fasta
//!
//! # Codon usage as TSV
//! bioloop --format tsv codon-usage -i cds.fasta -o usage.tsv
//!
//! # CpG islands in the first 100 kb, 500 bp frames
//! bioloop cpg -i genome.fasta -w 100000 -f 500
//!
//! # Six-frame translation
//! bioloop translate -s ATGGCCTAA
//! ```
//!
//! ## Options
//!
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `--format <FORMAT>`: Report format: text or tsv (default: text)
//! - `-q, --quiet`: Suppress progress messages
//! - `--max-patterns <N>`: Largest wildcard expansion allowed
//!
//! `-i -` reads from stdin. Log verbosity can also be set with `RUST_LOG`.

use bioloop_core::config::{BioloopConfig, OutputFormat};
use bioloop_core::constants::DEFAULT_MAX_EXPANDED_PATTERNS;
use bioloop_core::output::write_report;
use bioloop_core::sequence::{read_records, sequence_from_text};
use bioloop_core::validate;
use bioloop_core::BioloopAnalyzer;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};
use env_logger::Env;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .help("Input file, '-' for stdin")
}

fn sequence_arg() -> Arg {
    Arg::new("sequence")
        .short('s')
        .long("sequence")
        .value_name("SEQ")
        .help("Sequence given directly on the command line")
}

fn motif_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("motif")
                .short('m')
                .long("motif")
                .value_name("MOTIF")
                .required(true)
                .help("Motif, X matches any symbol"),
        )
        .arg(input_arg().required(true))
}

fn cli() -> Command {
    Command::new("bioloop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Motif search, codon usage and CpG island detection")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .global(true)
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .global(true)
                .help("Report format: text, tsv")
                .default_value("text"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("max-patterns")
                .long("max-patterns")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Largest number of patterns a wildcard motif may expand to (at most 16,777,216)"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a random DNA sequence")
                .arg(
                    Arg::new("length")
                        .short('l')
                        .long("length")
                        .value_name("LEN")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Sequence length (at most 10,000,000)"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .value_parser(value_parser!(u64))
                        .help("Seed for reproducible output"),
                ),
        )
        .subcommand(
            Command::new("gc")
                .about("GC content of a sequence")
                .arg(input_arg())
                .arg(sequence_arg())
                .group(
                    ArgGroup::new("source")
                        .args(["input", "sequence"])
                        .required(true),
                ),
        )
        .subcommand(motif_command("dna-motif", "Search a DNA motif"))
        .subcommand(motif_command("protein-motif", "Search a protein motif"))
        .subcommand(
            Command::new("codon-usage")
                .about("Codon usage of a FASTA file")
                .arg(input_arg().required(true)),
        )
        .subcommand(
            Command::new("cpg")
                .about("Find CpG islands")
                .arg(input_arg().required(true))
                .arg(
                    Arg::new("window")
                        .short('w')
                        .long("window")
                        .value_name("WINDOW")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Number of leading bases to search (1-5,000,000)"),
                )
                .arg(
                    Arg::new("frame")
                        .short('f')
                        .long("frame")
                        .value_name("FRAME")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Width of each scored window (200-10,000)"),
                ),
        )
        .subcommand(
            Command::new("translate")
                .about("Six-frame translation")
                .arg(input_arg())
                .arg(sequence_arg())
                .group(
                    ArgGroup::new("source")
                        .args(["input", "sequence"])
                        .required(true),
                ),
        )
}

/// Read an input file, or stdin for "-"
fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

/// Sequence text from either `--sequence` or `--input`
fn read_source(matches: &ArgMatches) -> io::Result<String> {
    match matches.get_one::<String>("sequence") {
        Some(seq) => Ok(seq.clone()),
        None => read_input(required(matches, "input")),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Main entry point for the bioloop CLI application.
///
/// Parses command-line arguments, runs the requested analysis and writes the
/// report in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let quiet = matches.get_flag("quiet");
    env_logger::Builder::from_env(Env::default().default_filter_or(if quiet {
        "warn"
    } else {
        "info"
    }))
    .init();

    let output_format: OutputFormat = required(&matches, "format").parse()?;
    let mut config = BioloopConfig {
        quiet,
        output_format,
        max_expanded_patterns: validate::max_expanded_patterns(
            matches
                .get_one::<usize>("max-patterns")
                .copied()
                .unwrap_or(DEFAULT_MAX_EXPANDED_PATTERNS),
        )?,
        ..Default::default()
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let Some((name, sub)) = matches.subcommand() else {
        return Err("No command given".into());
    };

    match name {
        "generate" => {
            let length = validate::sequence_length(*sub.get_one::<usize>("length").unwrap_or(&0))?;
            config.seed = sub.get_one::<u64>("seed").copied();
            let seq = BioloopAnalyzer::new(config).generate_sequence(length)?;
            writeln!(writer, "{seq}")?;
        }
        "gc" => {
            let text = read_source(sub)?;
            let seq = sequence_from_text(&text);
            validate::has_nucleotides(&seq)?;
            let gc = BioloopAnalyzer::new(config).gc_content(&seq)?;
            writeln!(writer, "{gc}")?;
        }
        "dna-motif" | "protein-motif" => {
            let text = read_input(required(sub, "input"))?;
            let motif = required(sub, "motif");
            let analyzer = BioloopAnalyzer::new(config);
            let report = if name == "dna-motif" {
                analyzer.search_dna_motif(motif, &text)?
            } else {
                analyzer.search_protein_motif(motif, &text)?
            };
            write_report(&mut writer, &report, output_format)?;
        }
        "codon-usage" => {
            let text = read_input(required(sub, "input"))?;
            let report = BioloopAnalyzer::new(config).codon_usage(&text)?;
            write_report(&mut writer, &report, output_format)?;
        }
        "cpg" => {
            let window = validate::search_window(*sub.get_one::<usize>("window").unwrap_or(&0))?;
            let frame = validate::search_frame(*sub.get_one::<usize>("frame").unwrap_or(&0))?;
            let text = read_input(required(sub, "input"))?;
            let report = BioloopAnalyzer::new(config).cpg_islands(&text, window, frame)?;
            write_report(&mut writer, &report, output_format)?;
        }
        "translate" => {
            let text = read_source(sub)?;
            let analyzer = BioloopAnalyzer::new(config);
            let records = read_records(&text)?;
            if records.is_empty() {
                return Err("No sequence found in input".into());
            }
            let multiple = records.len() > 1;
            for (id, _, seq) in &records {
                let report = analyzer.six_frame_translation(&String::from_utf8_lossy(seq))?;
                if multiple && output_format == OutputFormat::Text {
                    writeln!(writer, ">{id}")?;
                }
                write_report(&mut writer, &report, output_format)?;
            }
        }
        other => return Err(format!("Unknown command: {other}").into()),
    }

    writer.flush()?;
    info!("Analysis complete");

    Ok(())
}
