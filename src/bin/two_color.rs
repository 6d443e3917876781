use std::time::Instant;

use clap::{load_yaml, App};
use serde_json::json;

use dense_color::color::is_proper_coloring;
use dense_color::solvers::two_color::two_color;
use dense_color::util::{export_results, read_params};

/** 2-colors an instance (fails if it is not bipartite) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("two_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, graph, sol_file, perf_file) = read_params(main_args);

    // solve it
    let t_start = Instant::now();
    let coloring = match two_color(&graph) {
        Ok(c) => c,
        Err(err) => {
            println!("2-coloring failed: {}", err);
            std::process::exit(1);
        }
    };
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = coloring.nb_colors();
    println!("2-coloring took {:.3} seconds. Nb colors: {}", duration, nb_colors);
    assert!(is_proper_coloring(&graph, &coloring));
    let stats = json!({
        "nb_colors": nb_colors,
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(&graph, &coloring, &stats, perf_file, sol_file, false);
}
