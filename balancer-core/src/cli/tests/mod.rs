mod pick_tests;
