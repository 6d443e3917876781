use clap::ArgMatches;
use serde_json::Value;

use crate::color::{is_proper_coloring, Coloring};
use crate::dimacs::graph_from_file;
use crate::graph::Graph;

/** reads command line input and returns the instance name, the graph,
and the optional solution and stats filenames */
pub fn read_params(main_args: ArgMatches) -> (String, Graph, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap();
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solution in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let graph = graph_from_file(inst_filename);
    graph.display_statistics();
    println!("=======================");
    (inst_filename.to_string(), graph, sol_file, perf_file)
}

/// exports run results to files
pub fn export_results(
    graph: &Graph,
    coloring: &Coloring,
    stats: &Value,
    perf_file: Option<String>,
    sol_file: Option<String>,
    check_result: bool,
) {
    // export statistics
    match perf_file {
        None => {}
        Some(filename) => {
            let mut file = match std::fs::File::create(filename.as_str()) {
                Err(why) => panic!("couldn't create {}: {}", filename, why),
                Ok(file) => file,
            };
            if let Err(why) = std::io::Write::write(
                &mut file,
                serde_json::to_string(stats).unwrap().as_bytes(),
            ) {
                panic!("couldn't write: {}", why)
            };
        }
    }
    // export coloring
    match sol_file {
        None => {}
        Some(filename) => {
            if check_result && !is_proper_coloring(graph, coloring) {
                println!("improper coloring (expected for the Wigderson heuristic on some inputs)");
            }
            if let Err(why) = std::fs::write(filename.as_str(), coloring.to_lines()) {
                panic!("couldn't write the coloring in {}: {}", filename, why)
            }
        }
    }
}
