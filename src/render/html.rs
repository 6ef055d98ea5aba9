use crate::error::FigureResult;
use crate::render::{Figure, Renderer};

/// Inline viewer: draws the figure as SVG and swaps overlays on slider input.
const VIEWER_SCRIPT: &str = r##"(function () {
  "use strict";
  var SVG = "http://www.w3.org/2000/svg";
  var fig = JSON.parse(document.getElementById("figure-data").textContent);
  var layout = fig.layout;
  var root = document.getElementById("figure");
  var width = layout.viewport.width, height = layout.viewport.height, m = layout.margins;
  var pw = width - m.left - m.right, ph = height - m.top - m.bottom;
  var xr = layout.x_axis.range, yr = layout.y_axis.range;
  function sx(v) { return m.left + (v / 2 - xr.start / 2) / (xr.end / 2 - xr.start / 2) * pw; }
  function sy(v) { return m.top + (yr.end / 2 - v / 2) / (yr.end / 2 - yr.start / 2) * ph; }
  function el(name, attrs, parent) {
    var node = document.createElementNS(SVG, name);
    Object.keys(attrs).forEach(function (k) { node.setAttribute(k, attrs[k]); });
    if (parent) { parent.appendChild(node); }
    return node;
  }
  function text(value, attrs, parent) {
    var node = el("text", attrs, parent);
    node.textContent = value;
    return node;
  }
  function tickLabel(t) { return String(Math.round(t * 1e6) / 1e6); }

  var heading = document.createElement("h2");
  root.appendChild(heading);
  var svg = el("svg", { width: width, height: height, viewBox: "0 0 " + width + " " + height });
  root.appendChild(svg);
  el("rect", { x: m.left, y: m.top, width: pw, height: ph },
    el("clipPath", { id: "plot-area" }, el("defs", {}, svg)));

  var axes = el("g", { "class": "axes" }, svg);
  layout.x_axis.ticks.forEach(function (t) {
    el("line", { x1: sx(t), x2: sx(t), y1: m.top, y2: m.top + ph, stroke: "#e8e8e8" }, axes);
    text(tickLabel(t), { x: sx(t), y: m.top + ph + 16, "text-anchor": "middle" }, axes);
  });
  layout.y_axis.ticks.forEach(function (t) {
    el("line", { x1: m.left, x2: m.left + pw, y1: sy(t), y2: sy(t), stroke: "#e8e8e8" }, axes);
    text(tickLabel(t), { x: m.left - 6, y: sy(t) + 4, "text-anchor": "end" }, axes);
  });
  if (xr.start <= 0 && 0 <= xr.end) {
    el("line", { x1: sx(0), x2: sx(0), y1: m.top, y2: m.top + ph,
      stroke: layout.x_axis.zero_line.color, "stroke-width": layout.x_axis.zero_line.width }, axes);
  }
  if (yr.start <= 0 && 0 <= yr.end) {
    el("line", { x1: m.left, x2: m.left + pw, y1: sy(0), y2: sy(0),
      stroke: layout.y_axis.zero_line.color, "stroke-width": layout.y_axis.zero_line.width }, axes);
  }
  text(layout.x_axis.title, { x: m.left + pw / 2, y: height - 8, "text-anchor": "middle" }, axes);
  text(layout.y_axis.title, { x: 14, y: m.top + ph / 2, "text-anchor": "middle" }, axes);

  var plot = el("g", { "clip-path": "url(#plot-area)" }, svg);
  var groups = fig.data.map(function (trace) {
    var g = el("g", {}, plot);
    if (trace.mode === "lines") {
      var d = "", pen = false;
      for (var i = 0; i < trace.x.length; i++) {
        var x = trace.x[i], y = trace.y[i];
        if (x === null || y === null) { pen = false; continue; }
        d += (pen ? "L" : "M") + sx(x).toFixed(2) + " " + sy(y).toFixed(2);
        pen = true;
      }
      if (trace.fill_to_self && d) { d += "Z"; }
      el("path", { d: d, stroke: trace.line.color, "stroke-width": trace.line.width,
        fill: trace.fill_to_self ? trace.line.color : "none", "fill-opacity": 0.4 }, g);
    } else {
      for (var j = 0; j < trace.x.length; j++) {
        if (trace.x[j] === null || trace.y[j] === null) { continue; }
        el("circle", { cx: sx(trace.x[j]), cy: sy(trace.y[j]), r: trace.marker.size / 2,
          fill: trace.marker.color }, g);
      }
    }
    return g;
  });

  var legend = document.createElement("ul");
  legend.className = "legend";
  root.appendChild(legend);
  var current = fig.data.map(function (trace) { return trace.visible; });
  var toggled = {};
  function shown(i) {
    if (current[i] === "hidden") { return false; }
    if (i in toggled) { return toggled[i]; }
    return current[i] === "visible";
  }
  function redraw() {
    groups.forEach(function (g, i) { g.style.display = shown(i) ? "" : "none"; });
    legend.textContent = "";
    fig.data
      .map(function (trace, i) { return { trace: trace, index: i }; })
      .filter(function (e) { return e.trace.show_legend && current[e.index] !== "hidden"; })
      .sort(function (a, b) { return a.trace.legend_rank - b.trace.legend_rank; })
      .forEach(function (e) {
        var item = document.createElement("li");
        var style = e.trace.line || e.trace.marker;
        item.textContent = e.trace.name;
        item.style.borderLeftColor = style.color;
        item.style.opacity = shown(e.index) ? "1" : "0.4";
        item.addEventListener("click", function () {
          toggled[e.index] = !shown(e.index);
          redraw();
        });
        legend.appendChild(item);
      });
  }

  var slider = layout.slider;
  var controls = document.createElement("div");
  controls.className = "slider";
  var valueLabel = document.createElement("span");
  var input = document.createElement("input");
  input.type = "range";
  input.min = "0";
  input.max = String(slider.steps.length - 1);
  input.value = String(slider.active);
  controls.appendChild(valueLabel);
  controls.appendChild(input);
  root.appendChild(controls);

  function selectStep(k) {
    var step = slider.steps[k];
    current = step.visible.slice();
    heading.textContent = step.title;
    document.title = step.title;
    valueLabel.textContent = slider.prefix + step.label;
    redraw();
  }
  input.addEventListener("input", function () { selectStep(Number(input.value)); });
  selectStep(slider.active);
})();"##;

const STYLESHEET: &str = "body{font-family:sans-serif;margin:16px}\
svg text{font-size:12px;fill:#444}\
.legend{list-style:none;padding:0;display:flex;flex-wrap:wrap;gap:12px}\
.legend li{cursor:pointer;border-left:14px solid;padding-left:6px}\
.slider{display:flex;align-items:center;gap:12px;margin-top:8px}\
.slider input{flex:1}";

/// Renders figures into standalone HTML documents.
///
/// The document embeds the figure JSON and a small inline viewer; it loads
/// nothing from the network. Output is byte-for-byte deterministic.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    document: Option<String>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful `render` call.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.document
    }

    pub fn render_document(figure: &Figure) -> FigureResult<String> {
        figure.validate()?;
        // `<` only occurs inside JSON strings, where the `\u003c` escape is
        // equivalent and cannot close the script element.
        let payload = figure.to_json()?.replace('<', "\\u003c");

        let mut html = String::with_capacity(payload.len() + VIEWER_SCRIPT.len() + 512);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n<title>figure</title>\n<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n<div id=\"figure\"></div>\n");
        html.push_str("<script type=\"application/json\" id=\"figure-data\">");
        html.push_str(&payload);
        html.push_str("</script>\n<script>\n");
        html.push_str(VIEWER_SCRIPT);
        html.push_str("\n</script>\n</body>\n</html>\n");
        Ok(html)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, figure: &Figure) -> FigureResult<()> {
        self.document = Some(Self::render_document(figure)?);
        Ok(())
    }
}
