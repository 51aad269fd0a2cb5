use std::{any, time::Instant};

use gnuplot::{
    AlignType, AutoOption, Axes2D, AxesCommon, Coordinate, Figure, LegendOption, PlotOption, Tick,
};
use inversion_count::{
    inversions::{BruteForce, DivideAndConquer, Inversions},
    rand::permutation,
};

const N: usize = 18;
const XS: [usize; N] = const {
    let mut xs = [0; N];
    let (mut i, mut x) = (0, 1);
    while i < N {
        xs[i] = x;
        x *= 2;
        i += 1;
    }
    xs
};

fn plot(counter: impl Inversions, max_len: usize, axes: &mut Axes2D) {
    let xs: Vec<_> = XS.into_iter().filter(|&x| x <= max_len).collect();
    let ys: Vec<_> = xs
        .iter()
        .map(|&x| {
            let mut items = permutation(x);
            let before = Instant::now();
            counter.count_and_sort(&mut items);
            before.elapsed().as_nanos() as u64
        })
        .collect();
    axes.lines_points(
        xs,
        ys,
        &[
            PlotOption::LineWidth(2.0),
            PlotOption::PointSize(2.0),
            PlotOption::Caption(any::type_name_of_val(&counter).split("::").last().unwrap()),
        ],
    );
}

fn main() {
    let mut figure = Figure::new();
    figure.set_title("Counting Inversions");

    let x_ticks = (1..)
        .map(|x| Tick::Major(2f32.powi(x), AutoOption::<f32>::Auto))
        .take(N);
    let y_ticks = (1..)
        .zip([
            "10ns", "100ns", "1µs", "10µs", "100µs", "1ms", "10ms", "100ms", "1s", "10s", "100s",
        ])
        .map(|(y, label)| Tick::Major(10f32.powi(y), AutoOption::Fix(label)));

    let axes = figure
        .axes2d()
        .set_legend(
            Coordinate::Graph(0.05),
            Coordinate::Graph(0.95),
            &[LegendOption::Placement(
                AlignType::AlignLeft,
                AlignType::AlignTop,
            )],
            &[],
        )
        .set_x_grid(true)
        .set_x_label("Array length", &[])
        .set_x_ticks_custom(x_ticks, &[], &[])
        .set_x_log(Some(2.0))
        .set_y_grid(true)
        .set_y_label("Time (ns)", &[])
        .set_y_ticks_custom(y_ticks, &[], &[])
        .set_y_log(Some(10.0));

    plot(BruteForce, 1 << 12, axes);
    plot(DivideAndConquer::<false>, usize::MAX, axes);
    plot(DivideAndConquer::<true>, usize::MAX, axes);

    figure.show().unwrap();
}
