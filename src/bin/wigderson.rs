use std::time::Instant;

use clap::{load_yaml, App};
use serde_json::json;

use dense_color::color::is_proper_coloring;
use dense_color::solvers::wigderson::wigderson;
use dense_color::util::{export_results, read_params};

/** colors an instance with the Wigderson heuristic (for 3-colorable graphs) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("wigderson.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, graph, sol_file, perf_file) = read_params(main_args);

    // solve it
    let t_start = Instant::now();
    let coloring = match wigderson(&graph) {
        Ok(c) => c,
        Err(err) => {
            // a non-bipartite neighborhood means the graph is likely not 3-colorable
            println!("wigderson failed: {}", err);
            std::process::exit(1);
        }
    };
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = coloring.nb_colors();
    let proper = is_proper_coloring(&graph, &coloring);
    println!("Wigderson took {:.3} seconds. Nb colors: {}", duration, nb_colors);
    println!("proper coloring: {}", proper);
    let stats = json!({
        "nb_colors": nb_colors,
        "proper": proper,
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(&graph, &coloring, &stats, perf_file, sol_file, true);
}
