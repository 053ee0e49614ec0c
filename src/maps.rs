//! The fixture maps: hardcoded graphs with their heuristic tables.
//!
//! These are data, not logic; the engine accepts them as constructed
//! [CostGraph] values and never parses anything.

use lazy_static::lazy_static;

use bestfirst::CostGraph;

/// A named map with its customary start and goal.
pub struct Fixture {
    pub name: &'static str,
    pub graph: CostGraph<String>,
    pub start: &'static str,
    pub goal: &'static str,
}

lazy_static! {
    /// The Romania road map, with straight-line distance to Bucharest
    /// as the heuristic.
    pub static ref ROMANIA: Fixture = romania();

    /// A small directed graph of lettered nodes flowing down to G,
    /// carrying one consistent heuristic table (h1) and one
    /// overestimating table (h2).
    pub static ref SEVEN_NODE: Fixture = seven_node();
}

fn romania() -> Fixture {
    let mut graph = CostGraph::new();

    let roads: &[(&str, &str, u64)] = &[
        ("Arad", "Zerind", 75),
        ("Arad", "Sibiu", 140),
        ("Arad", "Timisoara", 118),
        ("Zerind", "Oradea", 71),
        ("Oradea", "Sibiu", 151),
        ("Sibiu", "Fagaras", 99),
        ("Sibiu", "Rimnicu Vilcea", 80),
        ("Fagaras", "Bucharest", 211),
        ("Rimnicu Vilcea", "Pitesti", 97),
        ("Rimnicu Vilcea", "Craiova", 146),
        ("Pitesti", "Bucharest", 101),
        ("Pitesti", "Craiova", 138),
        ("Craiova", "Dobreta", 120),
        ("Dobreta", "Mehadia", 75),
        ("Mehadia", "Lugoj", 70),
        ("Lugoj", "Timisoara", 111),
        ("Bucharest", "Urziceni", 85),
        ("Bucharest", "Giurgiu", 90),
        ("Urziceni", "Hirsova", 98),
        ("Urziceni", "Vaslui", 142),
        ("Hirsova", "Eforie", 86),
        ("Vaslui", "Iasi", 92),
        ("Iasi", "Neamt", 87),
    ];
    for &(a, b, distance) in roads {
        graph.add_undirected_edge(a.to_string(), b.to_string(), distance);
    }

    let sld: &[(&str, u64)] = &[
        ("Arad", 366),
        ("Bucharest", 0),
        ("Craiova", 160),
        ("Dobreta", 242),
        ("Eforie", 161),
        ("Fagaras", 178),
        ("Giurgiu", 77),
        ("Hirsova", 151),
        ("Iasi", 226),
        ("Lugoj", 244),
        ("Mehadia", 241),
        ("Neamt", 234),
        ("Oradea", 380),
        ("Pitesti", 98),
        ("Rimnicu Vilcea", 193),
        ("Sibiu", 253),
        ("Timisoara", 329),
        ("Urziceni", 80),
        ("Vaslui", 199),
        ("Zerind", 374),
    ];
    let table = graph.heuristic_table_mut("sld");
    for &(city, distance) in sld {
        table.insert(city.to_string(), distance);
    }

    Fixture {
        name: "romania",
        graph,
        start: "Arad",
        goal: "Bucharest",
    }
}

fn seven_node() -> Fixture {
    let mut graph = CostGraph::new();

    let edges: &[(&str, &str, u64)] = &[
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "D", 3),
        ("B", "E", 5),
        ("C", "E", 2),
        ("C", "F", 2),
        ("D", "G", 6),
        ("E", "G", 1),
        ("F", "G", 3),
    ];
    for &(a, b, cost) in edges {
        graph.add_edge(a.to_string(), b.to_string(), cost);
    }

    let h1: &[(&str, u64)] = &[
        ("A", 7),
        ("B", 6),
        ("C", 3),
        ("D", 6),
        ("E", 1),
        ("F", 3),
        ("G", 0),
    ];
    let table = graph.heuristic_table_mut("h1");
    for &(node, estimate) in h1 {
        table.insert(node.to_string(), estimate);
    }

    let h2: &[(&str, u64)] = &[
        ("A", 10),
        ("B", 9),
        ("C", 5),
        ("D", 8),
        ("E", 3),
        ("F", 4),
        ("G", 0),
    ];
    let table = graph.heuristic_table_mut("h2");
    for &(node, estimate) in h2 {
        table.insert(node.to_string(), estimate);
    }

    Fixture {
        name: "seven-node",
        graph,
        start: "A",
        goal: "G",
    }
}
