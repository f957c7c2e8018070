//! Code generation from a resolved board.
//!
//! Every renderer works from the same ordered list of `EdgeStatement`s:
//! kinds in `CellKind::ALL` order, cells by index within a kind, links in
//! the cell's offset order. Output is a pure function of the board.

use crate::board::{Board, KindCounts};
use crate::cell::CellRef;
use crate::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One directed edge for the engine to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStatement {
    pub from: CellRef,
    pub direction: Direction,
    pub to: CellRef,
}

impl fmt::Display for EdgeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m_graph->{}->add_edge({}, m_graph->{});",
            self.from,
            self.direction,
            self.to
        )
    }
}

/// All edge statements for `board`, in emission order.
///
/// The target accessor always follows the neighbor's own kind, whatever the
/// source kind. On the hex lattice roads and hex-like cells only reach
/// junctions; elsewhere a link may join two cells of the same kind, and it is
/// emitted like any other.
pub fn edge_statements(board: &Board) -> Vec<EdgeStatement> {
    board
        .all_cells()
        .flat_map(|cell| {
            cell.links().map(move |(direction, to)| EdgeStatement {
                from: cell.id(),
                direction,
                to,
            })
        })
        .collect()
}

/// Render the C++ header that builds `board` for the engine.
///
/// `name` names the generated class (`<name>Board`).
pub fn render_header(board: &Board, name: &str) -> String {
    let counts = board.counts();
    let mut out = format!(
        "// Generated by boardgen. Do not edit.
#pragma once

#include \"../Board.h\"
#include \"../Graph.h\"

namespace Graph {{

class {name}Board : public Board {{
public:
    {name}Board()
    {{
        m_graph = new Graph(
            {roads}, // roads
            {junctions}, // junctions
            {tiles}, // hexes
            {flippables}, // flippables
            {oceans} // oceans
        );

",
        roads = counts.roads,
        junctions = counts.junctions,
        tiles = counts.tiles,
        flippables = counts.flippables,
        oceans = counts.oceans,
    );

    for statement in edge_statements(board) {
        out.push_str(&format!("        {statement}\n"));
    }

    out.push_str(
        "    }

private:
    Graph* m_graph;
};

} // namespace Graph
",
    );
    out
}

/// Engine-independent description of a generated board graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGraph {
    pub name: String,
    pub counts: KindCounts,
    pub edges: Vec<EdgeStatement>,
}

impl BoardGraph {
    pub fn new(board: &Board, name: &str) -> Self {
        Self {
            name: name.to_string(),
            counts: board.counts(),
            edges: edge_statements(board),
        }
    }
}

/// Render `board` as a pretty-printed JSON `BoardGraph`.
pub fn render_json(board: &Board, name: &str) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&BoardGraph::new(board, name))?;
    json.push('\n');
    Ok(json)
}
