//! End to end: builders -> engine -> gnuplot script text.
//!
//! Nothing here needs gnuplot installed; the script is rendered into memory.

use gnutemplate::domain::Terminal;
use gnutemplate::sink::{Recorder, SinkCall};
use gnutemplate::{
    BoxOptions, HistogramOptions, InlineCapture, OutputTarget, PlotError, PlotSpec, ScriptSink,
    build_box_spec, build_histogram_spec, build_line_spec, emit, emit_multiplot, render,
};

fn script(spec: &PlotSpec, target: Option<&OutputTarget>) -> String {
    let mut sink = ScriptSink::new(Vec::new());
    render(spec, target, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn test_line_chart_script() {
    let spec = build_line_spec(&[vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]]).unwrap();
    let text = script(&spec, None);

    assert_eq!(
        lines(&text),
        vec![
            "set yrange [0.0:50.0]",
            "set grid",
            "$data0 << EOD",
            "0.0 1.0",
            "1.0 2.0",
            "2.0 3.0",
            "EOD",
            "$data1 << EOD",
            "0.0 3.0",
            "1.0 2.0",
            "2.0 1.0",
            "EOD",
            "plot $data0 with linespoints lc rgb \"#1199dd\" pointtype 7 pointsize 0.7 title \"0\", \
             $data1 with linespoints lc rgb \"#99dd11\" pointtype 7 pointsize 0.7 title \"1\"",
        ]
    );
}

#[test]
fn test_line_chart_to_gif_file() {
    let spec = build_line_spec(&[vec![1.0], vec![2.0]]).unwrap();
    let text = script(&spec, Some(&OutputTarget::gif("out.gif")));
    assert!(text.starts_with("set terminal gif\nset output \"out.gif\"\nset yrange"));
}

#[test]
fn test_box_script_uses_candlesticks_and_alpha_colors() {
    let rows = vec![vec![1.0, 2.0], vec![5.0, 6.0], vec![0.5, 1.5], vec![4.0, 8.0]];
    let options = BoxOptions {
        xtick_labels: Some(vec!["Jan".into(), "Feb".into()]),
        ..Default::default()
    };
    let text = script(&build_box_spec(&rows, &["a", "b"], &options).unwrap(), None);

    assert!(text.contains("set xtics (\"Jan\" 0.5, \"Feb\" 1.5)\n"));
    assert!(text.contains("set xtics rotate by 90\n"));
    assert!(text.contains("set xrange [0.5:8.0]\n"));
    assert!(text.contains("set style fill solid\n"));
    assert!(text.contains("with candlesticks fc rgb \"#9ACC0000\" title \"a\""));
    assert!(text.contains("with candlesticks fc rgb \"#9A00CC00\" title \"b\""));
}

#[test]
fn test_box_tick_labels_are_escaped() {
    let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let options = BoxOptions {
        xtick_labels: Some(vec!["a\\".into(), "b\"c".into()]),
        ..Default::default()
    };
    let text = script(&build_box_spec(&rows, &["t"], &options).unwrap(), None);
    assert!(text.contains(r#"set xtics ("a\\" 1.0, "b\"c" 2.0)"#));
}

#[test]
fn test_pileup_histogram_script() {
    let data = vec![vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0]];
    let options = HistogramOptions {
        bins: 5,
        background: Some("#20DDDDDD".into()),
        ..Default::default()
    };
    let text = script(&build_histogram_spec(&data, &options).unwrap(), None);

    assert!(text.contains("set size 1.0,1.0\n"));
    assert!(text.contains("set xtics 0.0, 1.0, 7.0\n"));
    assert!(text.contains("set xtics rotate by 45\n"));
    assert!(text.contains("set xrange [0.0:7.0]\n"));
    // Background band first, then the bars
    assert!(text.contains("plot [1.0:6.0] 4.4 with filledc above y=0.0 fc \"#20DDDDDD\" notitle, $data0 with boxes title \"0\" fillcolor rgb \"#54CC0000\""));
}

#[test]
fn test_clustered_histogram_script() {
    let data = vec![vec![0.0, 1.0, 1.0], vec![2.0, 3.0, 4.0]];
    let options = HistogramOptions {
        pileup: false,
        bins: 2,
        labels: Some(vec!["before".into(), "after".into()]),
        ..Default::default()
    };
    let text = script(&build_histogram_spec(&data, &options).unwrap(), None);

    let expected_settings = [
        "set auto x",
        "set style data histogram",
        "set style histogram cluster gap 1",
        "set style fill solid border -1",
        "set boxwidth 0.9",
        "set xtic rotate by -45 scale 0",
        "set xrange [0.0:2.0]",
        "set xtics (\"0.0-2.0\" 0.0, \"2.0-4.0\" 1.0)",
    ];
    for (line, expected) in text.lines().zip(expected_settings) {
        assert_eq!(line, expected);
    }
    assert!(text.contains("$data0 using 2 with histogram title \"before\" fillcolor rgb \"#54CC0000\""));
    assert!(text.contains("$data1 using 2 with histogram title \"after\" fillcolor rgb \"#5400CC00\""));
}

#[test]
fn test_inline_capture_overrides_file_target() {
    let spec = build_line_spec(&[vec![1.0], vec![2.0]]).unwrap();
    let mut sink = ScriptSink::new(Vec::new());
    render(
        &spec,
        Some(&OutputTarget::gif("ignored.gif")),
        &mut InlineCapture::with_terminal(&mut sink, Terminal::Png),
    )
    .unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert!(text.starts_with("set terminal png\nset output\n"));
    assert!(!text.contains("ignored.gif"));
}

#[test]
fn test_inline_capture_without_target_selects_terminal() {
    let spec = build_line_spec(&[vec![1.0], vec![2.0]]).unwrap();
    let mut sink = ScriptSink::new(Vec::new());
    render(&spec, None, &mut InlineCapture::new(&mut sink)).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert!(text.starts_with("set terminal svg\nset output\nset yrange [0.0:50.0]\n"));
}

#[test]
fn test_multiplot_script() {
    let a = build_line_spec(&[vec![1.0], vec![2.0]]).unwrap();
    let b = build_histogram_spec(&[vec![1.0, 2.0, 3.0]], &HistogramOptions::default()).unwrap();
    let mut sink = ScriptSink::new(Vec::new());
    emit_multiplot(&[a, b], 1, 2, None, &mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    assert!(text.starts_with("set multiplot layout 1,2\nreset\n"));
    assert_eq!(text.lines().filter(|l| *l == "reset").count(), 2);
    assert_eq!(text.lines().filter(|l| l.starts_with("plot ")).count(), 2);
    assert!(text.ends_with("unset multiplot\n"));
}

#[test]
fn test_recorder_and_script_see_the_same_calls() {
    let spec = build_histogram_spec(&[vec![1.0, 2.0], vec![2.0, 3.0]], &HistogramOptions::default())
        .unwrap();
    let mut rec = Recorder::new();
    emit(&spec, &mut rec).unwrap();

    let set_lines = script(&spec, None)
        .lines()
        .filter(|l| l.starts_with("set "))
        .count();
    let set_calls = rec
        .calls()
        .iter()
        .filter(|c| matches!(c, SinkCall::Set { .. }))
        .count();
    assert_eq!(set_lines, set_calls);
    assert_eq!(rec.plot_count(), 1);
}

#[test]
fn test_invalid_input_never_reaches_the_sink() {
    let err = build_line_spec(&[vec![1.0, 2.0], vec![1.0]]).unwrap_err();
    assert!(matches!(err, PlotError::InvalidInput(_)));
}
