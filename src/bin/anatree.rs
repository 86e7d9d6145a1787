extern crate clap;

use std::io::{self, BufWriter, Write};
use std::process::exit;
use clap::{Arg, App, SubCommand};

use anatree::*;

pub fn common_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of plain text")
        .required(false));
    args.push(Arg::with_name("min_size")
        .long("min-size")
        .short("m")
        .help("Minimum number of distinct words a group must have to be reported. Set to 1 to also output words without anagrams")
        .takes_value(true)
        .default_value("2"));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Read and insert words one by one on a single thread, rather than computing summaries in parallel (lowers memory use)")
        .required(false));
    args.push(Arg::with_name("files")
        .help("Input text files, use - for standard input (the default)")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn main() {
    let rootargs = App::new("Anatree")
                    .version(env!("CARGO_PKG_VERSION"))
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Finds all groups of anagrams amongst the words of a text")
                    .subcommand(
                        SubCommand::with_name("groups")
                            .about("Output all groups of words that are anagrams of one another")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("index")
                            .about("Output the entire anagram index, one summary per line with all its words, tab separated")
                            .args(&common_arguments())
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let (args, dump_index) = if let Some(args) = rootargs.subcommand_matches("groups") {
        (args, false)
    } else if let Some(args) = rootargs.subcommand_matches("index") {
        (args, true)
    } else {
        eprintln!("No command specified, use groups or index (see --help)");
        exit(2);
    };

    let min_size: usize = match args.value_of("min_size").unwrap_or("2").parse::<usize>() {
        Ok(min_size) => min_size,
        Err(_) => {
            eprintln!("ERROR: Minimum group size should be a positive integer");
            exit(2);
        }
    };
    let mut params = IndexParameters::default().with_min_group_size(min_size);
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }

    let mut index = AnagramIndex::new(params, rootargs.is_present("debug"));

    let files: Vec<_> = if args.is_present("files") {
        args.values_of("files").map(|files| files.collect()).unwrap_or_default()
    } else {
        vec!("-")
    };
    for filename in files {
        let result = match filename {
            "-" | "STDIN" | "stdin"  => {
                eprintln!("Reading words from standard input...");
                let stdin = io::stdin();
                index.load_words(stdin.lock())
            },
            _ =>  {
                eprintln!("Reading words from {}...", filename);
                index.read_words(filename)
            }
        };
        match result {
            Ok(count) => eprintln!(" - Read {} words", count),
            Err(e) => {
                eprintln!("ERROR: Unable to read {}: {}", filename, e);
                exit(1);
            }
        }
    }
    eprintln!(" - Found {} distinct words with {} distinct summaries", index.word_count(), index.len());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = if dump_index {
        write_index_tsv(&mut writer, index.nodes())
    } else if args.is_present("json") {
        write_groups_json(&mut writer, index.groups())
    } else {
        write_groups_text(&mut writer, index.groups())
    };
    if let Err(e) = result.and_then(|_| writer.flush()) {
        eprintln!("ERROR: Unable to write output: {}", e);
        exit(1);
    }
}
