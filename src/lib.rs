pub mod configuration;
pub mod configurationerror;

pub mod fourier {
    pub mod fourierserieserror;
    pub mod fourierseries;
    pub mod tablesink;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod quadrature;
        pub mod midpointrule;
    }
}

pub mod waveform {
    pub mod waveform;
}
