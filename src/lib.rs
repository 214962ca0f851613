pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod function;
        pub mod functions;
        pub mod functionexpr;

        pub mod basic {
            pub mod exp;
            pub mod log;
            pub mod trigonometric;
        }

        pub mod meta {
            pub mod sum;
            pub mod power;
            pub mod composition;
        }

        pub mod tabulated {
            pub mod functionpoint;
            pub mod tabulatedfunctionerror;
            pub mod tabulatedfunction;
            pub mod linkedlisttabulatedfunction;
            pub mod arraytabulatedfunction;
            pub mod tabulator;
            pub mod tabulatedfunctioncodec;
            pub mod tabulatedfunctionmanager;
        }
    }
    pub mod tolerance;
}
