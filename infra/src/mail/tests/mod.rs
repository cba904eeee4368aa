mod notifier_adapter_tests;
