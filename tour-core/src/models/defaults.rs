//! Built-in German reference data: a depot near Hannover, centroids of two digit postal
//! zones and a curated list of delivery regions.

use crate::algorithms::geometry::Coordinate;
use crate::models::config::*;
use crate::models::Region;
use crate::utils::Float;
use lazy_static::lazy_static;

/// Default depot location.
pub const DEFAULT_DEPOT: (Float, Float) = (52.3759, 9.7320);

/// Geographic centre of Germany used for unknown postcodes.
pub const DEFAULT_FALLBACK: (Float, Float) = (51.1657, 10.4515);

const POSTCODE_CENTROIDS: &[(&str, Float, Float)] = &[
    ("01", 51.05, 13.74),
    ("02", 51.18, 14.42),
    ("03", 51.76, 14.33),
    ("04", 51.34, 12.37),
    ("06", 51.48, 11.97),
    ("07", 50.88, 12.08),
    ("08", 50.72, 12.49),
    ("09", 50.83, 12.92),
    ("10", 52.52, 13.40),
    ("12", 52.45, 13.45),
    ("13", 52.57, 13.35),
    ("14", 52.39, 13.06),
    ("15", 52.34, 14.55),
    ("16", 52.83, 13.82),
    ("17", 53.56, 13.26),
    ("18", 54.09, 12.13),
    ("19", 53.63, 11.41),
    ("20", 53.55, 9.99),
    ("21", 53.25, 10.41),
    ("22", 53.60, 10.05),
    ("23", 53.87, 10.69),
    ("24", 54.32, 10.12),
    ("25", 54.30, 9.20),
    ("26", 53.14, 8.21),
    ("27", 53.30, 8.80),
    ("28", 53.08, 8.80),
    ("29", 52.62, 10.08),
    ("30", 52.37, 9.73),
    ("31", 52.15, 9.95),
    ("32", 52.12, 8.67),
    ("33", 52.02, 8.53),
    ("34", 51.31, 9.48),
    ("35", 50.58, 8.68),
    ("36", 50.55, 9.68),
    ("37", 51.54, 9.93),
    ("38", 52.27, 10.52),
    ("39", 52.13, 11.63),
    ("40", 51.23, 6.78),
    ("41", 51.19, 6.44),
    ("42", 51.26, 7.15),
    ("44", 51.51, 7.47),
    ("45", 51.46, 7.01),
    ("46", 51.60, 6.70),
    ("47", 51.43, 6.76),
    ("48", 51.96, 7.63),
    ("49", 52.28, 8.05),
    ("50", 50.94, 6.96),
    ("51", 50.99, 7.13),
    ("52", 50.78, 6.08),
    ("53", 50.73, 7.10),
    ("54", 49.75, 6.64),
    ("55", 49.99, 8.25),
    ("56", 50.36, 7.59),
    ("57", 50.87, 8.02),
    ("58", 51.36, 7.47),
    ("59", 51.68, 7.82),
    ("60", 50.11, 8.68),
    ("61", 50.23, 8.62),
    ("63", 50.00, 9.05),
    ("64", 49.87, 8.65),
    ("65", 50.08, 8.24),
    ("66", 49.24, 6.99),
    ("67", 49.44, 7.77),
    ("68", 49.49, 8.47),
    ("69", 49.40, 8.69),
    ("70", 48.78, 9.18),
    ("71", 48.89, 9.19),
    ("72", 48.52, 9.06),
    ("73", 48.70, 9.65),
    ("74", 49.14, 9.22),
    ("75", 48.89, 8.70),
    ("76", 49.01, 8.40),
    ("77", 48.47, 7.94),
    ("78", 48.06, 8.46),
    ("79", 47.99, 7.85),
    ("80", 48.14, 11.58),
    ("81", 48.11, 11.60),
    ("82", 47.85, 11.20),
    ("83", 47.86, 12.12),
    ("84", 48.54, 12.15),
    ("85", 48.76, 11.42),
    ("86", 48.37, 10.90),
    ("87", 47.73, 10.31),
    ("88", 47.78, 9.61),
    ("89", 48.40, 9.99),
    ("90", 49.45, 11.08),
    ("91", 49.60, 11.00),
    ("92", 49.50, 12.00),
    ("93", 49.01, 12.10),
    ("94", 48.57, 13.43),
    ("95", 50.10, 11.80),
    ("96", 49.89, 10.89),
    ("97", 49.79, 9.95),
    ("98", 50.61, 10.69),
    ("99", 50.98, 11.03),
];

const REGIONS: &[(&str, &[&str])] = &[
    (
        "Hannover",
        &[
            "30159", "30161", "30163", "30165", "30167", "30169", "30171", "30173", "30175", "30177", "30179", "30419",
            "30449", "30451", "30453", "30455", "30457", "30459", "30519", "30521", "30539", "30559", "30625", "30627",
            "30629", "30655", "30657", "30659", "30669",
        ],
    ),
    ("Hannover Umland", &["30823", "30826", "30827", "30851", "30853", "30880", "30890", "30900", "30916", "30938"]),
    ("Hildesheim", &["31134", "31135", "31137", "31139", "31141", "31157", "31180"]),
    ("Celle", &["29221", "29223", "29225", "29227", "29229"]),
    ("Braunschweig", &["38100", "38102", "38104", "38106", "38108", "38110", "38112", "38114", "38116", "38118"]),
    ("Wolfsburg", &["38440", "38442", "38444", "38446", "38448"]),
    ("Goettingen", &["37073", "37075", "37077", "37079", "37081", "37083", "37085"]),
    ("Kassel", &["34117", "34119", "34121", "34123", "34125", "34127", "34128", "34130", "34131", "34134"]),
    ("Bielefeld", &["33602", "33604", "33605", "33607", "33609", "33611", "33613", "33615", "33617", "33619"]),
    ("Osnabrueck", &["49074", "49076", "49078", "49080", "49082", "49084", "49086", "49088", "49090"]),
    ("Bremen", &["28195", "28197", "28199", "28201", "28203", "28205", "28207", "28209", "28211", "28213"]),
    ("Oldenburg", &["26121", "26122", "26123", "26125", "26127", "26129", "26131", "26133", "26135"]),
    ("Hamburg", &["20095", "20097", "20099", "20144", "20146", "20148", "20149", "22041", "22043", "22085"]),
    ("Magdeburg", &["39104", "39106", "39108", "39110", "39112", "39114", "39116", "39118", "39120", "39122"]),
    ("Berlin", &["10115", "10117", "10119", "10178", "10179", "10243", "10245", "10247", "12043", "13347"]),
    ("Leipzig", &["04103", "04105", "04107", "04109", "04155", "04177", "04229", "04275", "04299", "04315"]),
    ("Dresden", &["01067", "01069", "01097", "01099", "01127", "01139", "01157", "01187", "01217", "01277"]),
    ("Muenster", &["48143", "48145", "48147", "48149", "48151", "48153", "48155", "48157", "48159", "48161"]),
    ("Dortmund", &["44135", "44137", "44139", "44141", "44143", "44145", "44147", "44149", "44225", "44227"]),
    ("Koeln", &["50667", "50668", "50670", "50672", "50674", "50676", "50677", "50678", "50679", "50733"]),
    ("Frankfurt", &["60311", "60313", "60314", "60316", "60318", "60320", "60322", "60325", "60326", "60385"]),
    ("Stuttgart", &["70173", "70174", "70176", "70178", "70180", "70182", "70184", "70186", "70188", "70190"]),
    ("Nuernberg", &["90402", "90403", "90408", "90409", "90411", "90419", "90429", "90431", "90439", "90443"]),
    ("Muenchen", &["80331", "80333", "80335", "80336", "80337", "80339", "80469", "80538", "80539", "81541"]),
];

lazy_static! {
    static ref DEFAULT_CONFIG: PlannerConfig = create_default_config();
}

/// Returns a shared instance of the built-in configuration.
pub(crate) fn get_default_config() -> &'static PlannerConfig {
    &DEFAULT_CONFIG
}

fn create_default_config() -> PlannerConfig {
    PlannerConfig {
        depot: Coordinate::new(DEFAULT_DEPOT.0, DEFAULT_DEPOT.1),
        road_factor: DEFAULT_ROAD_FACTOR,
        improvement_threshold: DEFAULT_IMPROVEMENT_THRESHOLD_KM,
        fallback_coordinate: Coordinate::new(DEFAULT_FALLBACK.0, DEFAULT_FALLBACK.1),
        unknown_region: DEFAULT_UNKNOWN_REGION.to_string(),
        coordinates: POSTCODE_CENTROIDS
            .iter()
            .map(|&(prefix, lat, lng)| (prefix.to_string(), Coordinate::new(lat, lng)))
            .collect(),
        regions: REGIONS.iter().map(|&(name, postcodes)| Region::new(name, postcodes)).collect(),
    }
}
