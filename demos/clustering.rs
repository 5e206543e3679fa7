//! K-means on a simple 2D dataset, with iteration logging.
//!
//! Run with `cargo run --example clustering`.

use lloyd::{Init, Kmeans, Observation};

fn main() -> lloyd::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Three well-separated clusters in 2D.
    let rows: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    let mut observations = Observation::from_rows(rows)?;
    let fit = Kmeans::new(3)
        .with_seed(42)
        .with_init(Init::KmeansPlusPlus)
        .fit_observations(&mut observations)?;

    println!(
        "=== K-means (k=3): {:?} after {} iteration(s), inertia {:.4} ===",
        fit.termination(),
        fit.iterations(),
        fit.inertia()
    );
    for cluster in fit.clusters() {
        println!(
            "cluster {} centroid {:?} members {:?}",
            cluster.id(),
            cluster.centroid(),
            cluster.members().collect::<Vec<_>>()
        );
    }
    for o in &observations {
        let v = o.values();
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {:?}", o.id(), v[0], v[1], o.cluster());
    }

    println!("(7, 1) => cluster {}", fit.predict(&[7.0, 1.0])?);
    Ok(())
}
