use std::time::Instant;

use clap::{load_yaml, App};
use serde_json::json;

use dense_color::color::is_proper_coloring;
use dense_color::graph::VertexId;
use dense_color::solvers::greedy::greedy;
use dense_color::util::{export_results, read_params};

/** colors an instance greedily in natural vertex order */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("greedy.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, graph, sol_file, perf_file) = read_params(main_args);

    // solve it
    let t_start = Instant::now();
    let order: Vec<VertexId> = (0..graph.nb_vertices()).collect();
    let coloring = greedy(&graph, &order)
        .expect("greedy: the natural order only names existing vertices");
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = coloring.nb_colors();
    println!("greedy took {:.3} seconds. Nb colors: {}", duration, nb_colors);
    assert!(is_proper_coloring(&graph, &coloring));
    let stats = json!({
        "nb_colors": nb_colors,
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(&graph, &coloring, &stats, perf_file, sol_file, false);
}
