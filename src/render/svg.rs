// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A minimal SVG document: an append-only list of immutable nodes, serialized once. The layout
// code only talks to this; nothing here knows about sequences.

use std::fmt;

use itertools::Itertools;

pub const DEFAULT_FONT_SIZE: f64 = 20.0;
pub const DEFAULT_FONT_FAMILY: &str = "monospace";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub font_family: String,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            fill: String::from("black"),
            anchor: TextAnchor::Middle,
            font_size: DEFAULT_FONT_SIZE,
            font_family: String::from(DEFAULT_FONT_FAMILY),
        }
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font(mut self, size: f64, family: impl Into<String>) -> Self {
        self.font_size = size;
        self.font_family = family.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: Option<f64>,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line {
            x1,
            y1,
            x2,
            y2,
            stroke: String::from("black"),
            stroke_width: None,
        }
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub stroke: String,
    pub fill: String,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Polyline {
            points,
            stroke: String::from("black"),
            fill: String::from("none"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(Text),
    Line(Line),
    Polyline(Polyline),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    view_box: String,
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(view_box: impl Into<String>) -> Self {
        Document {
            view_box: view_box.into(),
            nodes: Vec::new(),
        }
    }

    pub fn add_text(&mut self, text: Text) {
        self.nodes.push(Node::Text(text));
    }

    pub fn add_line(&mut self, line: Line) {
        self.nodes.push(Node::Line(line));
    }

    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.nodes.push(Node::Polyline(polyline));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\">\n",
            escape_xml(&self.view_box)
        ));
        for node in &self.nodes {
            out.push_str(&node_to_svg(node));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn node_to_svg(node: &Node) -> String {
    match node {
        Node::Text(t) => format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" style=\"font-size: {}px\" font-family=\"{}\" \
             text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>",
            num(t.x),
            num(t.y),
            escape_xml(&t.fill),
            num(t.font_size),
            escape_xml(&t.font_family),
            t.anchor,
            escape_xml(&t.content)
        ),
        Node::Line(l) => {
            let width = match l.stroke_width {
                Some(w) => format!(" stroke-width=\"{}\"", num(w)),
                None => String::new(),
            };
            format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"{}/>",
                num(l.x1),
                num(l.y1),
                num(l.x2),
                num(l.y2),
                escape_xml(&l.stroke),
                width
            )
        }
        Node::Polyline(p) => format!(
            "<polyline points=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            p.points
                .iter()
                .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                .join(" "),
            escape_xml(&p.fill),
            escape_xml(&p.stroke)
        ),
    }
}

// Coordinates are rounded to 1/100 px, so that float noise (e.g. 1.1 * 20) never reaches the
// output; integral values print without a fractional part.
fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        return String::from("0");
    }
    format!("{}", r)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
