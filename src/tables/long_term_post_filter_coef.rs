// since we support both 64 and 32 bit constants (via the Scaler floating point type alias) clippy complains
// when we squash a 64 bit constant into a 32 bit one but this is perfectly fine
#![allow(clippy::excessive_precision)]

use crate::common::{constants::MAX_FILTER_WIDTH, scaler::Scaler};

/// Low pass interpolation filter at 192 khz used to resample every input rate to 12.8 khz.
/// Centre tap at index 119, the last entry pads the filter so polyphase strides never overrun.
pub const TAB_RESAMP_FILTER: [Scaler; 240] = [
    -9.526839657e-08, -7.516813474e-07, -2.464301198e-06, -5.584447937e-06, -1.025166243e-05,
    -1.634378051e-05, -2.345081331e-05, -3.087663101e-05, -3.767037447e-05, -4.268720642e-05,
    -4.467561638e-05, -4.238617850e-05, -3.469459559e-05, -2.073020430e-05, 0.0,
    2.750222569e-05, 6.121179244e-05, 9.994325060e-05, 1.418821741e-04, 1.846237394e-04,
    2.252603289e-04, 2.605171586e-04, 2.869315105e-04, 3.010677735e-04, 2.997573706e-04,
    2.803500048e-04, 2.409606864e-04, 1.806958783e-04, 9.984194598e-05, 0.0,
    -1.158468189e-04, -2.433445801e-04, -3.768654085e-04, -5.096923997e-04, -6.342899415e-04,
    -7.426514261e-04, -8.267110408e-04, -8.788014197e-04, -8.921347220e-04, -8.612814697e-04,
    -7.826194863e-04, -6.547247166e-04, -4.786767077e-04, -2.582541430e-04, 0.0,
    2.868584811e-04, 5.906429862e-04, 8.976106766e-04, 1.192485972e-03, 1.459120965e-03,
    1.681259704e-03, 1.843374155e-03, 1.931533482e-03, 1.934263658e-03, 1.843351825e-03,
    1.654549348e-03, 1.368129500e-03, 9.892600429e-04, 5.281576571e-04, 0.0,
    -5.754182180e-04, -1.174286777e-03, -1.769627920e-03, -2.332366514e-03, -2.832585485e-03,
    -3.240918028e-03, -3.530018158e-03, -3.676043522e-03, -3.660079518e-03, -3.469432055e-03,
    -3.098717940e-03, -2.550687109e-03, -1.836719526e-03, -9.769513987e-04, 0.0,
    1.057726752e-03, 2.153131377e-03, 3.237914811e-03, 4.260408381e-03, 5.167688818e-03,
    5.907899038e-03, 6.432683928e-03, 6.699640251e-03, 6.674673755e-03, 6.334155008e-03,
    5.666768725e-03, 4.674959376e-03, 3.375888521e-03, 1.801836292e-03, 0.0,
    -1.968333616e-03, -4.029240533e-03, -6.098207633e-03, -8.082722407e-03, -9.885324804e-03,
    -1.140701953e-02, -1.255092822e-02, -1.322604655e-02, -1.335096202e-02, -1.285738482e-02,
    -1.169334650e-02, -9.825929910e-03, -7.243408300e-03, -3.956691279e-03, 0.0,
    4.569277878e-03, 9.671571846e-03, 1.520693689e-02, 2.105764008e-02, 2.709144776e-02,
    3.316550705e-02, 3.913069037e-02, 4.483625197e-02, 5.013463067e-02, 5.488622582e-02,
    5.896397177e-02, 6.225754223e-02, 6.467702866e-02, 6.615595500e-02, 6.665351604e-02,
    6.615595500e-02, 6.467702866e-02, 6.225754223e-02, 5.896397177e-02, 5.488622582e-02,
    5.013463067e-02, 4.483625197e-02, 3.913069037e-02, 3.316550705e-02, 2.709144776e-02,
    2.105764008e-02, 1.520693689e-02, 9.671571846e-03, 4.569277878e-03, 0.0,
    -3.956691279e-03, -7.243408300e-03, -9.825929910e-03, -1.169334650e-02, -1.285738482e-02,
    -1.335096202e-02, -1.322604655e-02, -1.255092822e-02, -1.140701953e-02, -9.885324804e-03,
    -8.082722407e-03, -6.098207633e-03, -4.029240533e-03, -1.968333616e-03, 0.0,
    1.801836292e-03, 3.375888521e-03, 4.674959376e-03, 5.666768725e-03, 6.334155008e-03,
    6.674673755e-03, 6.699640251e-03, 6.432683928e-03, 5.907899038e-03, 5.167688818e-03,
    4.260408381e-03, 3.237914811e-03, 2.153131377e-03, 1.057726752e-03, 0.0,
    -9.769513987e-04, -1.836719526e-03, -2.550687109e-03, -3.098717940e-03, -3.469432055e-03,
    -3.660079518e-03, -3.676043522e-03, -3.530018158e-03, -3.240918028e-03, -2.832585485e-03,
    -2.332366514e-03, -1.769627920e-03, -1.174286777e-03, -5.754182180e-04, 0.0,
    5.281576571e-04, 9.892600429e-04, 1.368129500e-03, 1.654549348e-03, 1.843351825e-03,
    1.934263658e-03, 1.931533482e-03, 1.843374155e-03, 1.681259704e-03, 1.459120965e-03,
    1.192485972e-03, 8.976106766e-04, 5.906429862e-04, 2.868584811e-04, 0.0,
    -2.582541430e-04, -4.786767077e-04, -6.547247166e-04, -7.826194863e-04, -8.612814697e-04,
    -8.921347220e-04, -8.788014197e-04, -8.267110408e-04, -7.426514261e-04, -6.342899415e-04,
    -5.096923997e-04, -3.768654085e-04, -2.433445801e-04, -1.158468189e-04, 0.0,
    9.984194598e-05, 1.806958783e-04, 2.409606864e-04, 2.803500048e-04, 2.997573706e-04,
    3.010677735e-04, 2.869315105e-04, 2.605171586e-04, 2.252603289e-04, 1.846237394e-04,
    1.418821741e-04, 9.994325060e-05, 6.121179244e-05, 2.750222569e-05, 0.0,
    -2.073020430e-05, -3.469459559e-05, -4.238617850e-05, -4.467561638e-05, -4.268720642e-05,
    -3.767037447e-05, -3.087663101e-05, -2.345081331e-05, -1.634378051e-05, -1.025166243e-05,
    -5.584447937e-06, -2.464301198e-06, -7.516813474e-07, -9.526839657e-08, 0.0,
];

/// Symmetric half band kernel (centre tap first) for 12.8 khz to 6.4 khz
pub const TAB_RESAMP_6P4: [Scaler; 3] = [2.819382921e-01, 2.353512128e-01, 1.236796411e-01];

// 50hz high pass biquad (b0 == b2)
pub const HP50_A1: Scaler = -1.965293373;
pub const HP50_A2: Scaler = 0.965885461;
pub const HP50_B1: Scaler = -1.965589417;
pub const HP50_B2: Scaler = 0.982794708;

/// Interpolation of the 12.8 khz signal by quarter sample phase, applied to x(n+1)..x(n-2)
pub const TAB_LTPF_INTERP_X12K8: [[Scaler; 4]; 4] = [
    [2.098804630e-01, 5.835275750e-01, 2.098804630e-01, 0.0],
    [1.069991860e-01, 5.500750020e-01, 3.356906250e-01, 6.698858370e-03],
    [3.967114780e-02, 4.592209300e-01, 4.592209300e-01, 3.967114780e-02],
    [6.698858370e-03, 3.356906250e-01, 5.500750020e-01, 1.069991860e-01],
];

/// Interpolation of the 12.8 khz autocorrelation by quarter sample phase (8 taps)
pub const TAB_LTPF_INTERP_R: [[Scaler; 8]; 4] = [
    [
        1.535727700e-02, -4.729632460e-02, 8.357885730e-02, 8.986382850e-01,
        8.357885730e-02, -4.729632460e-02, 1.535727700e-02, 0.0,
    ],
    [
        2.745471650e-03, 4.598334490e-03, -7.544046360e-02, 8.174886860e-01,
        3.301825710e-01, -1.058359160e-01, 2.868234050e-02, -2.874561160e-03,
    ],
    [
        -3.001251030e-03, 2.950385030e-02, -1.303050210e-01, 6.032970080e-01,
        6.032970080e-01, -1.303050210e-01, 2.950385030e-02, -3.001251030e-03,
    ],
    [
        -2.874561160e-03, 2.868234050e-02, -1.058359160e-01, 3.301825710e-01,
        8.174886860e-01, -7.544046360e-02, 4.598334490e-03, 2.745471650e-03,
    ],
];

// synthesis filter coefficients, one table per sampling frequency index, rows padded to MAX_FILTER_WIDTH

/// Indexed by pitch fraction (quarter samples)
pub const TAB_LTPF_DEN_8000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        2.098804630e-01, 5.835275750e-01, 2.098804630e-01, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        1.069991860e-01, 5.500750020e-01, 3.356906250e-01, 6.698858370e-03, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        3.967114780e-02, 4.592209300e-01, 4.592209300e-01, 3.967114780e-02, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        6.698858370e-03, 3.356906250e-01, 5.500750020e-01, 1.069991860e-01, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Same as 8 khz
pub const TAB_LTPF_DEN_16000: [[Scaler; MAX_FILTER_WIDTH]; 4] = TAB_LTPF_DEN_8000;

/// Indexed by pitch fraction (quarter samples)
pub const TAB_LTPF_DEN_24000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        5.371966905e-02, 2.519423609e-01, 3.886759400e-01, 2.519423609e-01, 5.371966905e-02, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        2.644737533e-02, 1.953819587e-01, 3.786363845e-01, 3.061466322e-01, 9.187323945e-02, 1.514409853e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        9.652434345e-03, 1.399942304e-01, 3.503533353e-01, 3.503533353e-01, 1.399942304e-01, 9.652434345e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        1.514409853e-03, 9.187323945e-02, 3.061466322e-01, 3.786363845e-01, 1.953819587e-01, 2.644737533e-02,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Indexed by pitch fraction (quarter samples)
pub const TAB_LTPF_DEN_32000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        1.982494122e-02, 1.048839793e-01, 2.294873844e-01, 2.916073902e-01, 2.294873844e-01, 1.048839793e-01,
        1.982494122e-02, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        9.695809960e-03, 7.737614802e-02, 1.997784451e-01, 2.872250994e-01, 2.550855127e-01, 1.357190786e-01,
        3.447571047e-02, 6.441956924e-04, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        3.351226544e-03, 5.352830176e-02, 1.679353811e-01, 2.751850906e-01, 2.751850906e-01, 1.679353811e-01,
        5.352830176e-02, 3.351226544e-03, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        6.441956924e-04, 3.447571047e-02, 1.357190786e-01, 2.550855127e-01, 2.872250994e-01, 1.997784451e-01,
        7.737614802e-02, 9.695809960e-03, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Indexed by pitch fraction (quarter samples)
pub const TAB_LTPF_DEN_48000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        4.822817497e-03, 2.687875508e-02, 6.994780796e-02, 1.260599169e-01, 1.750532700e-01, 1.944748652e-01,
        1.750532700e-01, 1.260599169e-01, 6.994780796e-02, 2.687875508e-02, 4.822817497e-03, 0.0,
    ],
    [
        2.232598293e-03, 1.941430745e-02, 5.751469483e-02, 1.118791106e-01, 1.646578765e-01, 1.931222141e-01,
        1.833292245e-01, 1.401607658e-01, 8.338782178e-02, 3.566073304e-02, 8.386143207e-03, 2.545099282e-04,
    ],
    [
        7.572049265e-04, 1.322368766e-02, 4.593661972e-02, 9.769097937e-02, 1.530733161e-01, 1.893181922e-01,
        1.893181922e-01, 1.530733161e-01, 9.769097937e-02, 4.593661972e-02, 1.322368766e-02, 7.572049265e-04,
    ],
    [
        2.545099282e-04, 8.386143207e-03, 3.566073304e-02, 8.338782178e-02, 1.401607658e-01, 1.833292245e-01,
        1.931222141e-01, 1.646578765e-01, 1.118791106e-01, 5.751469483e-02, 1.941430745e-02, 2.232598293e-03,
    ],
];

pub const TAB_LTPF_DEN: [&[[Scaler; MAX_FILTER_WIDTH]; 4]; 5] = [
    &TAB_LTPF_DEN_8000,
    &TAB_LTPF_DEN_16000,
    &TAB_LTPF_DEN_24000,
    &TAB_LTPF_DEN_32000,
    &TAB_LTPF_DEN_48000,
];

/// Indexed by gain index
pub const TAB_LTPF_NUM_8000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        6.023618207e-01, 4.197609261e-01, -1.883424528e-02, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        5.994768583e-01, 4.197609261e-01, -1.594928284e-02, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        5.967764664e-01, 4.197609261e-01, -1.324889095e-02, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        5.942410120e-01, 4.197609261e-01, -1.071343659e-02, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Same as 8 khz
pub const TAB_LTPF_NUM_16000: [[Scaler; MAX_FILTER_WIDTH]; 4] = TAB_LTPF_NUM_8000;

/// Indexed by gain index
pub const TAB_LTPF_NUM_24000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        4.539015837e-01, 3.621706314e-01, 2.061393400e-01, -1.419229019e-02, -4.730763398e-03, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        4.514016272e-01, 3.611851181e-01, 2.067146785e-01, -1.200969166e-02, -4.003230554e-03, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        4.490648774e-01, 3.602639429e-01, 2.072524566e-01, -9.969581453e-03, -3.323193818e-03, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        4.468737243e-01, 3.594001636e-01, 2.077567272e-01, -8.056585141e-03, -2.685528380e-03, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Indexed by gain index
pub const TAB_LTPF_NUM_32000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        3.543708650e-01, 3.006585987e-01, 2.469463325e-01, 1.179330510e-01, -1.108023045e-02, -5.540115227e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        3.523755837e-01, 2.995566086e-01, 2.467376335e-01, 1.186812815e-01, -9.375070567e-03, -4.687535284e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        3.505110075e-01, 2.985268067e-01, 2.465426058e-01, 1.193804976e-01, -7.781610665e-03, -3.890805332e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    [
        3.487629989e-01, 2.975613848e-01, 2.463597707e-01, 1.200360008e-01, -6.287769100e-03, -3.143884550e-03,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
];

/// Indexed by gain index
pub const TAB_LTPF_NUM_48000: [[Scaler; MAX_FILTER_WIDTH]; 4] = [
    [
        2.510246163e-01, 2.256592861e-01, 2.002939558e-01, 1.749286256e-01, 1.140027940e-01, 5.307696235e-02,
        -7.848869287e-03, -5.232579525e-03, -2.616289762e-03, 0.0, 0.0, 0.0,
    ],
    [
        2.495233454e-01, 2.245886489e-01, 1.996539524e-01, 1.747192558e-01, 1.142666198e-01, 5.381398376e-02,
        -6.638652278e-03, -4.425768185e-03, -2.212884093e-03, 0.0, 0.0, 0.0,
    ],
    [
        2.481213736e-01, 2.235888272e-01, 1.990562808e-01, 1.745237345e-01, 1.145129953e-01, 5.450225616e-02,
        -5.508483002e-03, -3.672322001e-03, -1.836161001e-03, 0.0, 0.0, 0.0,
    ],
    [
        2.468078860e-01, 2.226521085e-01, 1.984963309e-01, 1.743405533e-01, 1.147438210e-01, 5.514708879e-02,
        -4.449643466e-03, -2.966428977e-03, -1.483214489e-03, 0.0, 0.0, 0.0,
    ],
];

pub const TAB_LTPF_NUM: [&[[Scaler; MAX_FILTER_WIDTH]; 4]; 5] = [
    &TAB_LTPF_NUM_8000,
    &TAB_LTPF_NUM_16000,
    &TAB_LTPF_NUM_24000,
    &TAB_LTPF_NUM_32000,
    &TAB_LTPF_NUM_48000,
];
