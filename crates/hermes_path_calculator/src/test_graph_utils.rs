pub mod test_graph {
    use crate::base_graph::BaseGraph;

    #[derive(Clone, Copy, Debug)]
    pub enum RomaniaGraphCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaGraphCity> for usize {
        fn from(value: RomaniaGraphCity) -> Self {
            value as usize
        }
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn romania_graph_edges() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, f64)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, 71.0),
            (Oradea, Sibiu, 151.0),
            (Zerind, Arad, 75.0),
            (Arad, Sibiu, 140.0),
            (Arad, Timisoara, 118.0),
            (Timisoara, Lugoj, 111.0),
            (Lugoj, Mehadia, 70.0),
            (Mehadia, Dobreta, 75.0),
            (Dobreta, Craiova, 120.0),
            (Craiova, RimnicuVilcea, 146.0),
            (Craiova, Pitesti, 138.0),
            (RimnicuVilcea, Pitesti, 97.0),
            (RimnicuVilcea, Sibiu, 80.0),
            (Sibiu, Fagaras, 99.0),
            (Fagaras, Bucharest, 211.0),
            (Pitesti, Bucharest, 101.0),
            (Bucharest, Giurgiu, 90.0),
            (Bucharest, Urziceni, 85.0),
            (Urziceni, Hirsova, 98.0),
            (Hirsova, Eforie, 86.0),
            (Urziceni, Vaslui, 142.0),
            (Vaslui, Iasi, 92.0),
            (Iasi, Neamt, 87.0),
        ]
    }

    /// Romania road map with distances in meters. Node 0 is isolated.
    pub fn create_romania_graph() -> BaseGraph {
        let mut graph = BaseGraph::new();

        for (start, end, kilometers) in romania_graph_edges() {
            graph.add_edge(start.into(), end.into(), kilometers * 1000.0);
        }

        graph
    }

    /// Id of the edge between `a` and `b` in the graph built by `create_romania_graph`
    pub fn romania_edge(a: RomaniaGraphCity, b: RomaniaGraphCity) -> usize {
        let (a, b): (usize, usize) = (a.into(), b.into());
        romania_graph_edges()
            .iter()
            .position(|&(start, end, _)| {
                let (start, end): (usize, usize) = (start.into(), end.into());
                (start, end) == (a, b) || (start, end) == (b, a)
            })
            .expect("no such edge in the romania graph")
    }
}

pub mod test_algorithms {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::{
        algorithm_factory::{CHRoutingAlgorithmFactory, RoutingAlgorithmFactory},
        algorithm_options::AlgorithmOptions,
        error::Result,
        graph::Graph,
        routing::{
            routing_algorithm::{EdgeToEdgeRoutingAlgorithm, RoutingAlgorithm},
            routing_path::RoutingPath,
        },
        types::{EdgeId, NodeId},
        weighting::Weighting,
    };

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum SearchCall {
        NodeToNode {
            source: NodeId,
            target: NodeId,
        },
        EdgeToEdge {
            source: NodeId,
            target: NodeId,
            source_out_edge: Option<EdgeId>,
            target_in_edge: Option<EdgeId>,
        },
    }

    /// Algorithm double answering every search with a fixed result
    #[derive(Clone)]
    pub struct ScriptedAlgorithm {
        name: String,
        result: Result<Vec<RoutingPath>>,
        visited_nodes: usize,
        edge_to_edge: bool,
        calls: Rc<RefCell<Vec<SearchCall>>>,
    }

    impl ScriptedAlgorithm {
        pub fn returning(paths: Vec<RoutingPath>) -> Self {
            ScriptedAlgorithm {
                name: "ScriptedAlgorithm".to_string(),
                result: Ok(paths),
                visited_nodes: 0,
                edge_to_edge: true,
                calls: Rc::default(),
            }
        }

        pub fn failing(result: crate::error::PathCalculatorError) -> Self {
            ScriptedAlgorithm {
                result: Err(result),
                ..Self::returning(Vec::new())
            }
        }

        pub fn named(mut self, name: &str) -> Self {
            self.name = name.to_string();
            self
        }

        pub fn with_visited_nodes(mut self, visited_nodes: usize) -> Self {
            self.visited_nodes = visited_nodes;
            self
        }

        pub fn without_edge_to_edge(mut self) -> Self {
            self.edge_to_edge = false;
            self
        }

        /// Searches recorded by every clone of this algorithm
        pub fn calls(&self) -> Vec<SearchCall> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: SearchCall) -> Result<Vec<RoutingPath>> {
            self.calls.borrow_mut().push(call);
            self.result.clone()
        }
    }

    impl RoutingAlgorithm for ScriptedAlgorithm {
        fn name(&self) -> &str {
            &self.name
        }

        fn calc_paths(&mut self, source: NodeId, target: NodeId) -> Result<Vec<RoutingPath>> {
            self.record(SearchCall::NodeToNode { source, target })
        }

        fn visited_nodes(&self) -> usize {
            self.visited_nodes
        }

        fn as_edge_to_edge(&mut self) -> Option<&mut dyn EdgeToEdgeRoutingAlgorithm> {
            if self.edge_to_edge { Some(self) } else { None }
        }
    }

    impl EdgeToEdgeRoutingAlgorithm for ScriptedAlgorithm {
        fn calc_paths_edge_to_edge(
            &mut self,
            source: NodeId,
            target: NodeId,
            source_out_edge: Option<EdgeId>,
            target_in_edge: Option<EdgeId>,
        ) -> Result<Vec<RoutingPath>> {
            self.record(SearchCall::EdgeToEdge {
                source,
                target,
                source_out_edge,
                target_in_edge,
            })
        }
    }

    /// Factory double handing out clones of one scripted algorithm
    pub struct ScriptedFactory {
        algorithm: ScriptedAlgorithm,
        created: Cell<usize>,
        last_options: RefCell<Option<AlgorithmOptions>>,
    }

    impl ScriptedFactory {
        pub fn new(algorithm: ScriptedAlgorithm) -> Self {
            ScriptedFactory {
                algorithm,
                created: Cell::new(0),
                last_options: RefCell::new(None),
            }
        }

        pub fn created(&self) -> usize {
            self.created.get()
        }

        pub fn last_options(&self) -> Option<AlgorithmOptions> {
            self.last_options.borrow().clone()
        }

        fn create(&self, options: &AlgorithmOptions) -> ScriptedAlgorithm {
            self.created.set(self.created.get() + 1);
            *self.last_options.borrow_mut() = Some(options.clone());
            self.algorithm.clone()
        }
    }

    impl CHRoutingAlgorithmFactory for ScriptedFactory {
        fn create_algo(&self, options: &AlgorithmOptions) -> Box<dyn RoutingAlgorithm + '_> {
            Box::new(self.create(options))
        }
    }

    impl<G: Graph> RoutingAlgorithmFactory<G> for ScriptedFactory {
        fn create_algo<'a>(
            &'a self,
            _graph: &'a G,
            _weighting: &'a dyn Weighting<G>,
            options: &AlgorithmOptions,
        ) -> Box<dyn RoutingAlgorithm + 'a> {
            Box::new(self.create(options))
        }
    }

    pub fn single_path() -> Vec<RoutingPath> {
        vec![RoutingPath::new(Vec::new(), 10, 100.0, 1000)]
    }
}
