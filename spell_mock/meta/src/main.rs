fn main() {
    multiversx_sc_meta_lib::cli_main::<spell_mock::AbiProvider>();
}
