//! Static data for the scale database: names and interval tables.
//!
//! Offsets are semitones above the root; only the populated prefix of each
//! scale is stored.

use super::scale::{NUM_EXOTIC_SCALES, NUM_SCALES, NUM_STANDARD_SCALES};

pub const SCALE_NAMES: [&str; NUM_SCALES] = [
    "Major", "Minor", "Harmonic Minor", "Melodic Minor", "Mixolydian", "Dorian",
    "Lydian", "Phrygian", "Aeolian", "Locrian", "Maj Pent", "Min Pent",
    "Whole Tone", "Octatonic HW", "Octatonic WH", "Ionian", "Blues Major", "Blues Minor",
    "Folk", "Japanese", "Gamelan", "Gypsy", "Arabian", "Flamenco",
    "Whole Tone (Exotic)", "Pythagorean", "1/4-EB", "1/4-E", "1/4-EA", "Bhairav",
    "Gunakri", "Marwa", "Shree", "Purvi", "Bilawal", "Yaman",
    "Kafi", "Bhimpalasree", "Darbari", "Rageshree", "Khamaj", "Mimal",
    "Parameshwari", "Rangeshwari", "Gangeshwari", "Kameshwari", "Pa_Kafi", "Natbhairav",
    "M_Kauns", "Bairagi", "B_Todi", "Chandradeep", "Kaushik_Todi", "Jogeshwari",
    "Tartini-Vallotti", "13/22-tET", "13/19-tET", "Magic145", "Quartaminorthirds", "Armodue",
    "Hirajoshi", "Scottish Bagpipes", "Thai Ranat", "Sevish 31-EDO", "11TET Machine", "13TET Father",
    "15TET Blackwood", "16TET Mavila", "16TET Mavila9", "17TET Superpyth", "22TET Orwell", "22TET Pajara",
    "22TET Pajara2", "22TET Porcupine", "26TET Flattone", "26TET Lemba", "46TET Sensi", "53TET Orwell",
    "72TET Prent", "Zeus Trivalent", "202TET Octone", "313TET Elfmadagasgar", "Marvel Glumma", "TOP Parapyth",
    "16ED", "15ED", "14ED", "13ED", "11ED", "10ED",
    "9ED", "8ED", "7ED", "6ED", "5ED", "16HD2",
    "15HD2", "14HD2", "13HD2", "12HD2", "11HD2", "10HD2",
    "9HD2", "8HD2", "7HD2", "6HD2", "5HD2", "32-16SD2",
    "30-15SD2", "28-14SD2", "26-13SD2", "24-12SD2", "22-11SD2", "20-10SD2",
    "18-9SD2", "16-8SD2", "14-7SD2", "12-6SD2", "10-5SD2", "8-4SD2",
    "BP Equal", "BP Just", "BP Lambda", "8-24HD3", "7-21HD3", "6-18HD3",
    "5-15HD3", "4-12HD3", "24-8HD3", "21-7HD3", "18-6HD3", "15-5HD3",
    "12-4HD3",
];

/// Semitone intervals of the algorithmically defined scales, in table order.
pub const STANDARD_INTERVALS: [&[u8]; NUM_STANDARD_SCALES] = [
    &[0, 2, 4, 5, 7, 9, 11, 12], // Major
    &[0, 2, 3, 5, 7, 8, 10, 12], // Minor
    &[0, 2, 3, 5, 7, 8, 11, 12], // Harmonic Minor
    &[0, 2, 3, 5, 7, 9, 11, 12], // Melodic Minor
    &[0, 2, 4, 5, 7, 9, 10, 12], // Mixolydian
    &[0, 2, 3, 5, 7, 9, 10, 12], // Dorian
    &[0, 2, 4, 6, 7, 9, 11, 12], // Lydian
    &[0, 1, 3, 5, 7, 8, 10, 12], // Phrygian
    &[0, 2, 3, 5, 7, 8, 10, 12], // Aeolian
    &[0, 1, 3, 5, 6, 8, 10, 12], // Locrian
    &[0, 2, 4, 7, 9], // Maj Pent
    &[0, 3, 5, 7, 10], // Min Pent
    &[0, 2, 4, 6, 8, 10, 12], // Whole Tone
    &[0, 1, 3, 4, 6, 7, 9, 10], // Octatonic HW
    &[0, 2, 3, 5, 6, 8, 9, 11], // Octatonic WH
    &[0, 2, 4, 5, 7, 9, 11, 12], // Ionian
];

pub const EXOTIC_INTERVALS: [&[f32]; NUM_EXOTIC_SCALES] = [
    // Blues Major
    &[0.0, 3.0, 4.0, 7.0, 9.0, 10.0],
    // Blues Minor
    &[0.0, 3.0, 5.0, 6.0, 7.0, 10.0],
    // Folk
    &[0.0, 1.0, 3.0, 4.0, 5.0, 7.0, 8.0, 10.0],
    // Japanese
    &[0.0, 1.0, 5.0, 7.0, 8.0],
    // Gamelan
    &[0.0, 1.0, 3.0, 7.0, 8.0],
    // Gypsy
    &[0.0, 2.0, 3.0, 6.0, 7.0, 8.0, 11.0],
    // Arabian
    &[0.0, 1.0, 4.0, 5.0, 7.0, 8.0, 11.0],
    // Flamenco
    &[0.0, 1.0, 4.0, 5.0, 7.0, 8.0, 10.0],
    // Whole Tone (Exotic)
    &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
    // Pythagorean
    &[0.0, 0.898, 2.039, 2.938, 4.078, 4.977, 6.117, 7.023, 7.922, 9.062, 9.961, 11.102],
    // 1/4-EB
    &[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 10.5],
    // 1/4-E
    &[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
    // 1/4-EA
    &[0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0, 8.5, 10.0, 11.0],
    // Bhairav
    &[0.0, 0.898, 3.859, 4.977, 7.023, 7.922, 10.883],
    // Gunakri
    &[0.0, 1.117, 4.977, 7.023, 8.141],
    // Marwa
    &[0.0, 1.117, 3.859, 5.898, 8.844, 10.883],
    // Shree
    &[0.0, 0.898, 3.859, 5.898, 7.023, 7.922, 10.883],
    // Purvi
    &[0.0, 1.117, 3.859, 5.898, 7.023, 8.141, 10.883],
    // Bilawal
    &[0.0, 2.039, 3.859, 4.977, 7.023, 9.062, 10.883],
    // Yaman
    &[0.0, 2.039, 4.078, 6.117, 7.023, 9.062, 11.102],
    // Kafi
    &[0.0, 1.820, 2.938, 4.977, 7.023, 8.844, 9.961],
    // Bhimpalasree
    &[0.0, 2.039, 3.156, 4.977, 7.023, 9.062, 10.180],
    // Darbari
    &[0.0, 2.039, 2.938, 4.977, 7.023, 7.922, 9.961],
    // Rageshree
    &[0.0, 2.039, 3.859, 4.977, 7.023, 8.844, 9.961],
    // Khamaj
    &[0.0, 2.039, 3.859, 4.977, 7.023, 9.062, 9.961, 11.102],
    // Mimal
    &[0.0, 2.039, 2.938, 4.977, 7.023, 8.844, 9.961, 10.883],
    // Parameshwari
    &[0.0, 0.898, 2.938, 4.977, 8.844, 9.961],
    // Rangeshwari
    &[0.0, 2.039, 2.938, 4.977, 7.023, 10.883],
    // Gangeshwari
    &[0.0, 3.859, 4.977, 7.023, 7.922, 9.961],
    // Kameshwari
    &[0.0, 2.039, 5.898, 7.023, 8.844, 9.961],
    // Pa_Kafi
    &[0.0, 2.039, 2.938, 4.977, 7.023, 9.062, 9.961],
    // Natbhairav
    &[0.0, 2.039, 3.859, 4.977, 7.023, 7.922, 10.883],
    // M_Kauns
    &[0.0, 2.039, 4.078, 4.977, 7.922, 9.961],
    // Bairagi
    &[0.0, 0.898, 4.977, 7.023, 9.961],
    // B_Todi
    &[0.0, 0.898, 2.938, 7.023, 9.961],
    // Chandradeep
    &[0.0, 2.938, 4.977, 7.023, 9.961],
    // Kaushik_Todi
    &[0.0, 2.938, 4.977, 5.898, 7.922],
    // Jogeshwari
    &[0.0, 2.938, 3.859, 4.977, 8.844, 9.961],
    // Tartini-Vallotti
    &[0.0, 0.9375, 1.9609, 2.9766, 3.9219, 5.0234, 5.9219, 6.9766, 7.9609, 8.9375, 10.0, 10.8984],
    // 13/22-tET
    &[0.0, 1.0938, 2.1797, 3.2734, 3.8203, 4.9063, 6.0, 6.5469, 7.6328, 8.7266, 9.2734, 10.3672, 11.4531],
    // 13/19-tET
    &[0.0, 1.2656, 1.8984, 3.1563, 3.7891, 5.0547, 5.6875, 6.9453, 7.5781, 8.8438, 9.4766, 10.7344, 11.3672],
    // Magic145
    &[0.0, 1.4922, 2.0703, 2.6484, 3.2266, 3.8047, 4.3828, 5.8750, 6.4531, 7.0313, 7.6172, 8.1953, 9.6797, 10.2656, 10.8438, 11.4219],
    // Quartaminorthirds
    &[0.0, 0.7734, 1.5547, 2.3281, 3.1094, 3.8828, 4.6641, 5.4375, 6.2188, 6.9922, 7.7734, 8.5469, 9.3203, 10.1016, 10.8750, 11.6563],
    // Armodue
    &[0.0, 0.7734, 1.5469, 2.3203, 3.0938, 3.8672, 4.6484, 5.4219, 6.1953, 6.9688, 7.7422, 8.5156, 9.2891, 9.6797, 10.4531, 11.2266],
    // Hirajoshi
    &[0.0, 1.8516, 3.3672, 6.8281, 7.8984],
    // Scottish Bagpipes
    &[0.0, 1.9688, 3.4063, 4.9531, 7.0313, 8.5313, 10.0938],
    // Thai Ranat
    &[0.0, 1.6094, 3.4609, 5.2578, 6.8594, 8.6172, 10.2891],
    // Sevish 31-EDO
    &[0.0, 1.1641, 2.3203, 3.0938, 4.2578, 5.0313, 6.1953, 7.3516, 8.1328, 9.2891, 10.0625, 11.2266],
    // 11TET Machine
    &[0.0, 2.1797, 4.3672, 5.4531, 7.6328, 9.8203],
    // 13TET Father
    &[0.0, 1.8438, 3.6953, 4.6172, 6.4609, 8.3047, 9.2344, 11.0781],
    // 15TET Blackwood
    &[0.0, 1.6016, 2.3984, 4.0, 4.7969, 6.3984, 7.2031, 8.7969, 9.6016, 11.2031],
    // 16TET Mavila
    &[0.0, 1.5, 3.0, 5.25, 6.75, 8.25, 9.75],
    // 16TET Mavila9
    &[0.0, 0.75, 2.25, 3.75, 5.25, 6.0, 7.5, 9.0, 10.5],
    // 17TET Superpyth
    &[0.0, 0.7031, 1.4141, 2.8203, 3.5313, 4.9375, 5.6484, 6.3516, 7.7578, 8.4688, 9.8828, 10.5859],
    // 22TET Orwell
    &[0.0, 1.0938, 2.7266, 3.8203, 5.4531, 6.5469, 8.1797, 9.2734, 10.9063],
    // 22TET Pajara
    &[0.0, 1.0938, 2.1797, 3.8203, 4.9063, 6.0, 7.0938, 8.1797, 9.8203, 10.9063],
    // 22TET Pajara2
    &[0.0, 1.0938, 2.1797, 3.8203, 4.9063, 6.0, 7.0938, 8.7266, 9.8203, 10.9063],
    // 22TET Porcupine
    &[0.0, 1.6328, 3.2734, 4.9063, 7.0938, 8.7266, 10.3672],
    // 26TET Flattone
    &[0.0, 0.4609, 1.8438, 2.3047, 3.6953, 5.0781, 5.5391, 6.9219, 7.3828, 8.7656, 9.2266, 10.6172],
    // 26TET Lemba
    &[0.0, 1.3828, 2.3047, 3.6953, 4.6172, 6.0, 7.3828, 8.3047, 9.6875, 10.6172],
    // 46TET Sensi
    &[0.0, 1.3047, 2.6094, 3.9141, 4.4375, 5.7422, 7.0469, 8.3516, 8.8672, 10.1719, 11.4766],
    // 53TET Orwell
    &[0.0, 1.1328, 2.7188, 3.8516, 5.4375, 6.5625, 8.1484, 9.2813, 10.8672],
    // 72TET Prent
    &[0.0, 2.0, 2.6641, 3.8359, 4.3359, 5.0, 5.5, 7.0, 8.8359, 9.6641, 10.5, 10.8359],
    // Zeus Trivalent
    &[0.0, 1.5781, 3.8750, 5.4531, 7.0313, 9.3359, 10.9063],
    // 202TET Octone
    &[0.0, 1.1875, 3.5078, 3.8594, 6.1797, 7.0078, 9.3281, 9.6797],
    // 313TET Elfmadagasgar
    &[0.0, 2.0313, 2.4922, 4.5234, 4.9844, 7.0156, 7.4766, 9.5078, 9.9688],
    // Marvel Glumma
    &[0.0, 0.4922, 2.3281, 3.1719, 3.8359, 5.4922, 6.1641, 7.0078, 8.8359, 9.3281, 9.6797, 11.6563],
    // TOP Parapyth
    &[0.0, 0.5859, 2.0703, 2.6563, 4.1406, 4.7266, 5.5469, 7.0469, 7.6172, 9.1094, 9.6875, 11.1797],
    // 16ED
    &[0.0, 0.75, 1.5, 2.25, 3.0, 3.75, 4.5, 5.25, 6.0, 6.75, 7.5, 8.25, 9.0, 9.75, 10.5, 11.25],
    // 15ED
    &[0.0, 0.7969, 1.6016, 2.3984, 3.2031, 4.0, 4.7969, 5.6016, 6.3984, 7.2031, 8.0, 8.7969, 9.6016, 10.3984, 11.2031],
    // 14ED
    &[0.0, 0.8594, 1.7109, 2.5703, 3.4297, 4.2891, 5.1484, 6.0, 6.8594, 7.7188, 8.5781, 9.4375, 10.2969, 11.1563],
    // 13ED
    &[0.0, 0.9219, 1.8438, 2.7656, 3.6953, 4.6328, 5.6328, 6.5703, 7.4922, 8.4141, 9.3359, 10.2578, 11.1797],
    // 11ED
    &[0.0, 1.0938, 2.1797, 3.2734, 4.3672, 5.4531, 6.5469, 7.6328, 8.7266, 9.8203, 10.9063],
    // 10ED
    &[0.0, 1.2031, 2.3984, 3.6016, 4.7969, 6.0, 7.2031, 8.3984, 9.6016, 10.7969],
    // 9ED
    &[0.0, 1.3359, 2.6641, 4.0, 5.3359, 6.6641, 8.0, 9.3359, 10.6641],
    // 8ED
    &[0.0, 1.5, 3.0, 4.5, 6.0, 7.5, 9.0, 10.5],
    // 7ED
    &[0.0, 1.7109, 3.4297, 5.1484, 6.8594, 8.5781, 10.2969],
    // 6ED
    &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
    // 5ED
    &[0.0, 2.3984, 4.7969, 7.2031, 9.6016],
    // 16HD2
    &[0.0, 1.0469, 2.0391, 2.9766, 3.8594, 4.7109, 5.5156, 6.2813, 7.0234, 7.7266, 8.4063, 9.0625, 9.6875, 10.2969, 10.8906, 11.4531],
    // 15HD2
    &[0.0, 1.1172, 2.1641, 3.1563, 4.0938, 4.9766, 5.8203, 6.6328, 7.4141, 8.1641, 8.8828, 9.5703, 10.2266, 10.852, 11.4453],
    // 14HD2
    &[0.0, 1.1953, 2.3125, 3.3594, 4.3516, 5.2891, 6.1797, 7.0313, 7.8516, 8.6406, 9.3984, 10.125, 10.8203, 11.4844],
    // 13HD2
    &[0.0, 1.2813, 2.4766, 3.5938, 4.6406, 5.6328, 6.5703, 7.4609, 8.3125, 9.125, 9.9063, 10.6484, 11.3594],
    // 12HD2
    &[0.0, 1.3828, 2.6719, 3.8594, 5.0078, 6.0313, 6.9922, 7.9531, 8.8438, 9.6875, 10.4844, 11.2656],
    // 11HD2
    &[0.0, 1.5078, 2.8906, 4.1719, 5.3672, 6.4844, 7.5391, 8.5234, 9.4688, 10.3672, 11.2109],
    // 10HD2
    &[0.0, 1.6484, 3.1563, 4.5391, 5.8672, 7.0234, 8.0703, 9.1875, 10.1797, 11.1094],
    // 9HD2
    &[0.0, 1.8203, 3.4766, 5.0938, 6.6797, 8.2422, 9.7891, 11.3203, 12.0],
    // 8HD2
    &[0.0, 2.0391, 3.8594, 5.5156, 7.0234, 8.4063, 9.6875, 10.8906],
    // 7HD2
    &[0.0, 2.3125, 4.3516, 6.1797, 7.8516, 9.3984, 10.8203],
    // 6HD2
    &[0.0, 3.0313, 6.0313, 9.0625, 12.0, 15.0],
    // 5HD2
    &[0.0, 4.0, 8.0, 12.0, 16.0],
    // 32-16SD2
    &[0.0, 0.5469, 1.1172, 1.7031, 2.3125, 2.9375, 3.5938, 4.2734, 4.9766, 5.7188, 6.4844, 7.2891, 8.0234, 8.9297, 9.9609, 10.9531],
    // 30-15SD2
    &[0.0, 0.5859, 1.1953, 1.8203, 2.4766, 3.1563, 3.8594, 4.6016, 5.3672, 6.1797, 7.0313, 7.9063, 8.8438, 9.8359, 10.8828],
    // 28-14SD2
    &[0.0, 0.6328, 1.2813, 1.9609, 2.6719, 3.4063, 4.1719, 4.977, 5.8203, 6.6953, 7.6328, 8.6328, 9.6875, 10.8047, 12.0],
    // 26-13SD2
    &[0.0, 0.6797, 1.3828, 2.125, 2.8906, 3.6953, 4.5391, 5.4219, 6.3516, 7.3203, 8.3281, 9.375, 10.4609],
    // 24-12SD2
    &[0.0, 0.7344, 1.5078, 2.3125, 3.1563, 4.0469, 4.9766, 5.9531, 6.9688, 8.0234, 9.1172, 10.25],
    // 22-11SD2
    &[0.0, 0.8047, 1.6484, 2.5391, 3.4766, 4.4609, 5.4922, 6.5703, 7.6953, 8.8672, 10.0859],
    // 20-10SD2
    &[0.0, 0.8906, 1.8203, 2.8125, 3.8594, 4.9609, 6.1172, 7.3281, 8.5938, 9.9141],
    // 18-9SD2
    &[0.0, 0.9922, 2.0391, 3.1563, 4.3359, 5.5781, 6.8828, 8.25, 9.6797],
    // 16-8SD2
    &[0.0, 1.1172, 2.3125, 3.5938, 4.9609, 6.4141, 7.9531, 9.5781],
    // 14-7SD2
    &[0.0, 1.2813, 2.6719, 4.1719, 5.7891, 7.5234, 9.375],
    // 12-6SD2
    &[0.0, 1.5078, 3.1563, 4.9609, 6.9219, 9.0391],
    // 10-5SD2
    &[0.0, 1.8203, 3.8594, 6.1719, 8.8438],
    // 8-4SD2
    &[0.0, 2.3125, 4.9766, 8.1406],
    // BP Equal
    &[0.0, 0.9219, 1.8438, 2.7656, 3.6953, 4.6172, 5.5391, 6.4609, 7.3828, 8.3047, 9.2344, 10.1563, 11.0781],
    // BP Just
    &[0.0, 0.8438, 1.9063, 2.7422, 3.6719, 4.6484, 5.5781, 6.4219, 7.3516, 8.3281, 9.2578, 10.0938, 11.1563],
    // BP Lambda
    &[0.0, 1.9063, 2.7422, 3.6719, 5.5781, 6.4219, 8.3281, 9.2578, 11.1563],
    // 8-24HD3
    &[0.0, 1.2891, 2.4375, 3.4766, 4.4297, 5.3047, 6.1172, 6.8828, 7.6172, 8.3203, 9.0, 9.6641, 10.3125, 10.9453, 11.5625, 12.1563],
    // 7-21HD3
    &[0.0, 1.4609, 2.7422, 3.8984, 4.9375, 5.8672, 6.6953, 7.4297, 8.0781, 8.6484, 9.1484, 9.5859, 9.9688, 10.3047],
    // 6-18HD3
    &[0.0, 1.6875, 3.1406, 4.4297, 5.5703, 6.5703, 7.4375, 8.1797, 8.8047, 9.3203, 9.7344, 10.0547],
    // 5-15HD3
    &[0.0, 1.9922, 3.6719, 5.1328, 6.3828, 7.4297, 8.2813, 8.9453, 9.4297, 9.7422],
    // 4-12HD3
    &[0.0, 2.4375, 4.4297, 6.1172, 7.6172, 9.0, 10.3125, 11.5625],
    // 24-8HD3
    &[0.0, 0.4688, 0.9531, 1.4609, 1.9922, 2.5469, 3.125, 3.7266, 4.3516, 5.0, 5.6719, 6.3672, 7.0859, 7.8281, 8.5938, 9.3828],
    // 21-7HD3
    &[0.0, 0.5313, 1.0938, 1.6875, 2.3047, 2.9453, 3.6094, 4.2969, 5.0078, 5.7422, 6.5, 7.2813, 8.0859, 8.9141],
    // 18-6HD3
    &[0.0, 0.625, 1.2891, 1.9922, 2.7344, 3.5156, 4.3359, 5.1953, 6.0938, 7.0313, 8.0078, 9.0234],
    // 15-5HD3
    &[0.0, 0.75, 1.5625, 2.4375, 3.375, 4.375, 5.4375, 6.5625, 7.75, 9.0],
    // 12-4HD3
    &[0.0, 0.9531, 1.9922, 3.125, 4.3516, 5.6719, 7.0859, 8.5938],
];
