use polygonize::{Coord, Polygon, PolygonizeResult, Polygonizer, polygonize};
use proptest::prelude::*;

const GRID: usize = 4;

type Segment = [[f64; 2]; 2];

/// All unit segments of a `GRID` x `GRID` lattice of cells.
fn lattice_segments() -> Vec<Segment> {
    let mut out = Vec::new();
    for y in 0..=GRID {
        for x in 0..=GRID {
            let (fx, fy) = (x as f64, y as f64);
            if x < GRID {
                out.push([[fx, fy], [fx + 1.0, fy]]);
            }
            if y < GRID {
                out.push([[fx, fy], [fx, fy + 1.0]]);
            }
        }
    }
    out
}

fn pick(mask: &[bool]) -> Vec<Segment> {
    lattice_segments()
        .into_iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(seg, _)| seg)
        .collect()
}

fn run(segments: &[Segment]) -> PolygonizeResult {
    polygonize(segments.iter().map(|s| s.to_vec())).unwrap()
}

fn key(c: &Coord) -> (i64, i64) {
    (c.x.round() as i64, c.y.round() as i64)
}

fn seg_key(a: &Coord, b: &Coord) -> ((i64, i64), (i64, i64)) {
    let (a, b) = (key(a), key(b));
    if a < b { (a, b) } else { (b, a) }
}

fn output_segments(result: &PolygonizeResult) -> Vec<((i64, i64), (i64, i64))> {
    let mut out = Vec::new();
    let rings = result
        .polygons()
        .iter()
        .flat_map(|p| p.rings())
        .map(|r| r.coords());
    let lines = result
        .dangles()
        .iter()
        .chain(result.cut_edges())
        .chain(result.invalid_ring_lines())
        .map(|l| l.coords());
    for coords in rings.chain(lines) {
        out.extend(coords.windows(2).map(|w| seg_key(&w[0], &w[1])));
    }
    out
}

fn sorted_areas(result: &PolygonizeResult) -> Vec<f64> {
    let mut areas: Vec<f64> = result.polygons().iter().map(Polygon::area).collect();
    areas.sort_by(f64::total_cmp);
    areas
}

fn mask_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 2 * GRID * (GRID + 1))
}

#[test]
fn full_lattice_yields_one_polygon_per_cell() {
    let result = run(&lattice_segments());
    assert_eq!(result.polygons().len(), GRID * GRID);
    assert!(result.polygons().iter().all(|p| p.area() == 1.0));
    assert!(result.dangles().is_empty());
    assert!(result.cut_edges().is_empty());
    assert!(result.invalid_ring_lines().is_empty());
}

proptest! {
    #[test]
    fn every_input_segment_is_reported(mask in mask_strategy()) {
        let segments = pick(&mask);
        let result = run(&segments);
        let covered = output_segments(&result);

        for s in &segments {
            let k = seg_key(&Coord::new(s[0][0], s[0][1]), &Coord::new(s[1][0], s[1][1]));
            prop_assert!(covered.contains(&k), "segment {:?} missing from output", s);
        }
    }

    #[test]
    fn polygons_never_exceed_the_lattice(mask in mask_strategy()) {
        let result = run(&pick(&mask));
        let total: f64 = result.polygons().iter().map(Polygon::area).sum();
        prop_assert!(total <= (GRID * GRID) as f64 + 1e-9);
        for poly in result.polygons() {
            prop_assert!(poly.exterior().signed_area() > 0.0);
            for hole in poly.interiors() {
                prop_assert!(hole.signed_area() < 0.0);
            }
        }
    }

    #[test]
    fn chain_direction_does_not_matter(mask in mask_strategy()) {
        let segments = pick(&mask);
        let flipped: Vec<Segment> = segments.iter().map(|&[a, b]| [b, a]).collect();

        let forward = run(&segments);
        let backward = run(&flipped);

        prop_assert_eq!(sorted_areas(&forward), sorted_areas(&backward));
        prop_assert_eq!(forward.dangles().len(), backward.dangles().len());
        prop_assert_eq!(forward.cut_edges().len(), backward.cut_edges().len());
        prop_assert_eq!(
            forward.invalid_ring_lines().len(),
            backward.invalid_ring_lines().len()
        );
    }

    #[test]
    fn repeated_queries_agree(mask in mask_strategy()) {
        let mut p = Polygonizer::new();
        p.add_lines(pick(&mask).iter().map(|s| s.to_vec())).unwrap();

        let first = p.result().clone();
        prop_assert_eq!(first.polygons(), p.polygons());
        prop_assert_eq!(first.dangles(), p.dangles());
        prop_assert_eq!(&first, p.result());
    }
}
