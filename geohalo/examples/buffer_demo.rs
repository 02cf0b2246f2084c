//! Buffers a few shapes and prints the results as GeoJSON.

use geohalo::buffer::buffer;
use geohalo_types::geometry::Geom;
use geohalo_types::impls::Contour;
use geohalo_types::latlon;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let shapes = vec![
        ("point", Geom::Point(latlon!(48.8584, 2.2945)), 500.0),
        (
            "route",
            Geom::Contour(Contour::open(vec![
                latlon!(59.9139, 10.7522),
                latlon!(60.3913, 5.3221),
            ])),
            10_000.0,
        ),
        ("near the seam", Geom::Point(latlon!(-16.8, 179.98)), 5_000.0),
    ];

    for (name, shape, meters) in &shapes {
        match buffer(shape, *meters) {
            Some(result) => {
                let geometry = geojson::GeoJson::Geometry(geojson::Geometry::from(&result));
                println!("{name}: {geometry}");
            }
            None => println!("{name}: nothing to draw"),
        }
    }
}
